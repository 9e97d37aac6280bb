//! CSV export of scan results.
//!
//! One header row, then one row per domain in scan order.

use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::row::{build_row, CSV_HEADERS};
use crate::models::ScanResult;

/// Writes `results` to the file at `path`, replacing it if it exists.
///
/// # Returns
///
/// Returns the number of records written.
pub fn write_csv(results: &[ScanResult], path: &Path) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let written = write_csv_to(results, file)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    log::info!("Wrote {} record(s) to {}", written, path.display());
    Ok(written)
}

/// Writes `results` as CSV to any writer.
pub fn write_csv_to<W: Write>(results: &[ScanResult], out: W) -> Result<usize> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;
    for result in results {
        writer.write_record(build_row(result))?;
    }
    writer.flush()?;
    Ok(results.len())
}
