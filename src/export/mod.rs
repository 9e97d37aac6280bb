//! Export of scan results.
//!
//! Flattens each `ScanResult` into a row and writes the table as CSV.

mod csv;
mod row;

pub use csv::{write_csv, write_csv_to};
pub use row::{build_row, CSV_HEADERS};
