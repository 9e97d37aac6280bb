//! Configuration constants.
//!
//! This module defines the constants used throughout the scanner: the fixed
//! set of audited pages, well-known resource paths, timeouts and size limits.

/// Home page path. Its response is also the one that gets fingerprinted.
pub const HOME_PAGE: &str = "/";

/// Pages audited for on-page signals, in the order they are fetched.
pub const AUDITED_PAGES: [&str; 2] = [HOME_PAGE, "/privacy"];

/// Location of the primary sitemap relative to the fully qualified domain.
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Location of robots.txt relative to the fully qualified domain.
pub const ROBOTS_PATH: &str = "/robots.txt";

/// Default output file for the CSV report.
pub const DEFAULT_OUTPUT_PATH: &str = "scan_output.csv";

/// Per-request timeout in seconds.
///
/// Applied to every fetch: primary sitemap, robots.txt, child sitemaps and
/// audited pages.
pub const DEFAULT_TIMEOUT_SECS: u64 = 4;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Default number of domains scanned at once (1 = fully sequential)
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Upper bound for `--max-concurrency`
pub const MAX_CONCURRENCY_LIMIT: usize = 64;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Default User-Agent string for HTTP requests.
///
/// Some sites serve bots a different sitemap or block them outright, so a
/// browser-like value is used unless `--user-agent` overrides it.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum response body size in bytes (50MB, the sitemap protocol's
/// per-file limit).
///
/// The body is streamed and the read aborts once this is exceeded.
pub const MAX_RESPONSE_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum accepted length of a single domain argument
pub const MAX_DOMAIN_LENGTH: usize = 253;
