//! seo_status library: sitemap, robots.txt and on-page SEO auditing
//!
//! For each domain the scanner resolves its sitemaps (direct, sitemap index
//! and robots.txt-declared), totals the URLs they list, estimates crawl time
//! from the declared crawl-delay, audits a fixed set of pages for metadata
//! and accessibility signals, and writes one CSV row per domain.
//!
//! # Example
//!
//! ```no_run
//! use seo_status::{Config, run_scan};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: Some("example.com,example.org".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Scanned {} domains ({} unreachable)",
//!          report.total_domains, report.unreachable_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
mod audit;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
mod fingerprint;
pub mod initialization;
mod models;
mod sitemap;
mod utils;

// Re-export public API
pub use app::parse_domain_list;
pub use audit::audit_pages;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, ProcessingStats, WarningType};
pub use export::write_csv;
pub use fetch::ScanContext;
pub use fingerprint::Fingerprinter;
pub use models::{
    FetchStatus, IndexEstimate, PageEntry, PageMetadata, Platforms, RobotsStatus, ScanResult,
    ScanWarning,
};
pub use run::{run_scan, scan_domain, ScanReport};
pub use sitemap::resolve_sitemaps;

// Internal run module (contains the scan driver)
mod run {
    use anyhow::{Context, Result};
    use std::path::PathBuf;
    use std::time::Instant;

    use futures::stream::{self, StreamExt};
    use log::{info, warn};

    use crate::app::{log_progress, parse_domain_list, print_final_statistics, to_fully_qualified};
    use crate::audit::audit_pages;
    use crate::config::Config;
    use crate::error_handling::ErrorType;
    use crate::export::write_csv;
    use crate::fetch::ScanContext;
    use crate::initialization::init_concurrency;
    use crate::models::{FetchStatus, RobotsStatus, ScanResult};
    use crate::sitemap::resolve_sitemaps;

    /// Results of a scan run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// One record per input domain, in input order
        pub results: Vec<ScanResult>,
        /// Number of domains scanned
        pub total_domains: usize,
        /// Domains for which no fetch got any HTTP response
        pub unreachable_domains: usize,
        /// Path of the CSV file written
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Scans one domain: sitemap pass, then page pass, on a fresh record.
    ///
    /// Never fails; every problem is recorded in the returned `ScanResult`.
    pub async fn scan_domain(ctx: &ScanContext, domain: &str) -> ScanResult {
        let mut result = ScanResult::new(domain);

        let Some(fqd) = to_fully_qualified(domain) else {
            ctx.stats.increment_error(ErrorType::InvalidDomain);
            let message = format!("Invalid domain: {domain}");
            result.sitemap_status = Some(FetchStatus::Failed(message.clone()));
            result.robots_status = Some(RobotsStatus::Failed(message));
            return result;
        };

        info!("Scanning {}", fqd);
        resolve_sitemaps(ctx, &fqd, &mut result).await;
        audit_pages(ctx, &fqd, &mut result).await;

        if !result.fetched_anything() {
            warn!("Nothing could be fetched from {}", fqd);
        }
        result
    }

    /// Runs a scan with the provided configuration.
    ///
    /// Scans every domain in `config.domains` (up to `max_concurrency` at a
    /// time, output kept in input order) and writes the CSV to `config.output`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - no domains are given
    /// - the HTTP client cannot be built
    /// - the output file cannot be written
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let domains = parse_domain_list(config.domains.as_deref().unwrap_or_default());
        if domains.is_empty() {
            anyhow::bail!("No domains given");
        }

        let ctx = ScanContext::from_config(&config).context("Failed to initialize HTTP client")?;
        let concurrency = init_concurrency(config.max_concurrency);
        let total_domains = domains.len();
        info!(
            "Scanning {} domain(s) with concurrency {}",
            total_domains, concurrency
        );

        let start_time = Instant::now();
        let mut scans = stream::iter(domains.iter())
            .map(|domain| scan_domain(&ctx, domain))
            .buffered(concurrency);

        let mut results = Vec::with_capacity(total_domains);
        while let Some(result) = scans.next().await {
            results.push(result);
            log_progress(start_time, results.len(), total_domains);
        }

        write_csv(&results, &config.output).context("Failed to write scan output")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        let unreachable_domains = results.iter().filter(|r| !r.fetched_anything()).count();
        print_final_statistics(&ctx.stats, total_domains, unreachable_domains, elapsed_seconds);

        Ok(ScanReport {
            results,
            total_domains,
            unreachable_domains,
            output_path: config.output.clone(),
            elapsed_seconds,
        })
    }
}
