//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - Concurrency limit for domain scans

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;

use crate::config::MAX_CONCURRENCY_LIMIT;

/// Clamps the requested number of concurrent domain scans to `1..=MAX_CONCURRENCY_LIMIT`.
pub fn init_concurrency(requested: usize) -> usize {
    if requested > MAX_CONCURRENCY_LIMIT {
        log::warn!(
            "Requested concurrency {} exceeds limit, using {}",
            requested,
            MAX_CONCURRENCY_LIMIT
        );
    }
    requested.clamp(1, MAX_CONCURRENCY_LIMIT)
}
