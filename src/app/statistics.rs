//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Prints the final counters and a one-line summary of the run.
pub fn print_final_statistics(
    stats: &ProcessingStats,
    total_domains: usize,
    unreachable_domains: usize,
    elapsed_seconds: f64,
) {
    print_error_statistics(stats);
    print_simple_summary(total_domains, unreachable_domains, elapsed_seconds);
}

fn print_simple_summary(total_domains: usize, unreachable_domains: usize, elapsed_seconds: f64) {
    info!(
        "✅ Scanned {} domain{} ({} reachable, {} unreachable) in {:.1}s",
        total_domains,
        if total_domains == 1 { "" } else { "s" },
        total_domains.saturating_sub(unreachable_domains),
        unreachable_domains,
        elapsed_seconds
    );
}

/// Prints error, warning, and info counts to the log, skipping zeroes.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_warnings = stats.total_warnings();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
