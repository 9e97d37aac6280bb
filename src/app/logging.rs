//! Progress logging.

use log::info;
use std::time::Instant;

/// Logs how many domains are done and the average time per domain.
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let per_domain = if completed > 0 {
        elapsed_secs / completed as f64
    } else {
        0.0
    };
    info!(
        "Scanned {}/{} domains in {:.2} seconds (~{:.2} s/domain)",
        completed, total, elapsed_secs, per_domain
    );
}
