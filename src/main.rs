//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `seo_status` library that handles argument
//! parsing, logger initialization and user-facing output. Exit codes:
//! `0` on success (or when no domains are given), `1` on a fatal error,
//! `2` when at least one domain could not be fetched at all.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_status::initialization::init_logger_with;
use seo_status::{parse_domain_list, run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if parse_domain_list(config.domains.as_deref().unwrap_or_default()).is_empty() {
        println!(
            "No domains given. Domains should be a comma-separated list you provide to the scanner."
        );
        return Ok(());
    }

    match run_scan(config).await {
        Ok(report) => {
            println!(
                "Your scan output csv has been written to {}",
                report.output_path.display()
            );
            if report.unreachable_domains > 0 {
                eprintln!(
                    "{} of {} domain(s) could not be fetched at all",
                    report.unreachable_domains, report.total_domains
                );
                process::exit(2);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_status error: {:#}", e);
            process::exit(1);
        }
    }
}
