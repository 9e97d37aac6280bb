//! Application helpers.
//!
//! Domain list parsing, progress logging and end-of-run statistics used by
//! the scan driver.

pub mod logging;
pub mod statistics;
pub mod url;

pub use logging::log_progress;
pub use statistics::print_final_statistics;
pub use url::{parse_domain_list, to_fully_qualified};
