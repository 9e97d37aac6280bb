//! The per-domain scan record and its typed field values.
//!
//! A `ScanResult` is created fresh for every domain, filled by the sitemap
//! pass and then the page pass, and flattened into one CSV row.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::config::SECONDS_PER_HOUR;

/// Outcome of fetching the primary sitemap.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// An HTTP response arrived with this status code.
    Code(u16),
    /// The request failed before any response (timeout, DNS, refused, ...).
    Failed(String),
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Code(code) => write!(f, "{code}"),
            FetchStatus::Failed(message) => f.write_str(message),
        }
    }
}

/// Outcome of fetching robots.txt.
#[derive(Debug, Clone, PartialEq)]
pub enum RobotsStatus {
    /// robots.txt answered 200.
    Ok,
    /// Any other HTTP status.
    Code(u16),
    /// The request failed before any response.
    Failed(String),
}

impl fmt::Display for RobotsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotsStatus::Ok => f.write_str("OK"),
            RobotsStatus::Code(code) => write!(f, "{code}"),
            RobotsStatus::Failed(message) => f.write_str(message),
        }
    }
}

/// Web-framework fingerprints for the domain.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Platforms {
    /// Lookup failed or found no web framework.
    #[default]
    Unknown,
    /// Framework names in ruleset order.
    Detected(Vec<String>),
}

impl fmt::Display for Platforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platforms::Unknown => f.write_str("unknown"),
            Platforms::Detected(names) => f.write_str(&to_json(names)),
        }
    }
}

/// Estimated hours needed to crawl every known URL at the declared crawl-delay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IndexEstimate {
    /// No crawl-delay was declared.
    #[default]
    Unknown,
    /// `total_url_count * crawl_delay / 3600`.
    Hours(f64),
}

impl fmt::Display for IndexEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexEstimate::Unknown => f.write_str("unknown"),
            IndexEstimate::Hours(hours) => write!(f, "{hours}"),
        }
    }
}

/// Metadata extracted from one audited page.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PageMetadata {
    /// Trimmed `<title>` text; `None` when missing or blank.
    pub title: Option<String>,
    /// Trimmed `<meta name="description">` content.
    pub description: Option<String>,
    /// First of `article:published_time`, `article:modified_time`, `DC.Date`.
    pub date: Option<String>,
}

/// Per-page audit outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PageEntry {
    /// The page answered 200 and was inspected.
    Audited(PageMetadata),
    /// The page answered with a non-OK status; nothing else was inspected.
    NotFound {
        /// HTTP status the page answered with.
        status: u16,
    },
    /// The request failed before any response.
    Error {
        /// Description of the failure.
        message: String,
    },
}

/// Cross-page warnings raised after the page pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanWarning {
    /// Two audited pages share a title.
    DuplicateTitles,
    /// Two audited pages share a meta description.
    DuplicateDescriptions,
}

impl ScanWarning {
    /// Tag written to the `warnings` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanWarning::DuplicateTitles => "duplicate titles",
            ScanWarning::DuplicateDescriptions => "duplicate descriptions",
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything learned about one domain.
///
/// Every field starts at a zero/unknown value so rows keep the same shape
/// even when a domain fails early.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Domain exactly as given on the command line.
    pub domain: String,
    /// Detected web frameworks.
    pub platforms: Platforms,
    /// Outcome of fetching `/sitemap.xml`; `None` until attempted.
    pub sitemap_status: Option<FetchStatus>,
    /// Post-redirect location of the primary sitemap.
    pub sitemap_final_url: Option<String>,
    /// `<url>` entries in the primary sitemap.
    pub sitemap_item_count: usize,
    /// Primary sitemap entries whose text contains ".pdf".
    pub pdf_item_count: usize,
    /// `<sitemap><loc>` values of a sitemap index, in document order.
    pub child_sitemap_urls_from_index: Vec<String>,
    /// Outcome of fetching `/robots.txt`; `None` until attempted.
    pub robots_status: Option<RobotsStatus>,
    /// First crawl-delay directive found, in seconds.
    pub crawl_delay: Option<f64>,
    /// `Sitemap:` declarations in robots.txt, in order.
    pub child_sitemap_urls_from_robots: Vec<String>,
    /// Primary sitemap count plus every child sitemap actually read.
    pub total_url_count: usize,
    /// Crawl-time estimate, computed once after aggregation.
    pub estimated_index_hours: IndexEstimate,
    /// Any audited page has a main landmark.
    pub main_landmark_found: bool,
    /// Any audited page has a search control.
    pub search_control_found: bool,
    /// Audit outcome keyed by page path.
    pub per_page: BTreeMap<String, PageEntry>,
    /// Cross-page warnings.
    pub warnings: BTreeSet<ScanWarning>,
}

impl ScanResult {
    /// Creates a zero-valued record for `domain`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            platforms: Platforms::Unknown,
            sitemap_status: None,
            sitemap_final_url: None,
            sitemap_item_count: 0,
            pdf_item_count: 0,
            child_sitemap_urls_from_index: Vec::new(),
            robots_status: None,
            crawl_delay: None,
            child_sitemap_urls_from_robots: Vec::new(),
            total_url_count: 0,
            estimated_index_hours: IndexEstimate::Unknown,
            main_landmark_found: false,
            search_control_found: false,
            per_page: BTreeMap::new(),
            warnings: BTreeSet::new(),
        }
    }

    /// Sets the URL total from the primary sitemap plus child sitemaps.
    ///
    /// The total never drops below `sitemap_item_count`.
    pub fn set_total_urls(&mut self, additional_urls: usize) {
        self.total_url_count = self.sitemap_item_count.saturating_add(additional_urls);
    }

    /// Derives `estimated_index_hours`; stays `Unknown` without a crawl-delay.
    pub fn estimate_index_time(&mut self) {
        if let Some(delay) = self.crawl_delay {
            self.estimated_index_hours =
                IndexEstimate::Hours(self.total_url_count as f64 * delay / SECONDS_PER_HOUR);
        }
    }

    /// Latches the main-landmark flag; a later page cannot reset it.
    pub fn record_main_landmark(&mut self, found: bool) {
        self.main_landmark_found |= found;
    }

    /// Latches the search-control flag; a later page cannot reset it.
    pub fn record_search_control(&mut self, found: bool) {
        self.search_control_found |= found;
    }

    /// True when at least one sitemap, robots.txt or page fetch got an HTTP response.
    pub fn fetched_anything(&self) -> bool {
        let sitemap = matches!(self.sitemap_status, Some(FetchStatus::Code(_)));
        let robots = matches!(
            self.robots_status,
            Some(RobotsStatus::Ok) | Some(RobotsStatus::Code(_))
        );
        let pages = self
            .per_page
            .values()
            .any(|entry| !matches!(entry, PageEntry::Error { .. }));
        sitemap || robots || pages
    }
}

/// JSON rendering for list- and map-valued cells.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_zero_valued() {
        let result = ScanResult::new("example.com");
        assert_eq!(result.domain, "example.com");
        assert_eq!(result.platforms, Platforms::Unknown);
        assert_eq!(result.sitemap_item_count, 0);
        assert_eq!(result.total_url_count, 0);
        assert_eq!(result.estimated_index_hours, IndexEstimate::Unknown);
        assert!(!result.main_landmark_found);
        assert!(!result.search_control_found);
        assert!(result.per_page.is_empty());
        assert!(result.warnings.is_empty());
        assert!(!result.fetched_anything());
    }

    #[test]
    fn test_fresh_records_do_not_share_state() {
        let mut first = ScanResult::new("a.example");
        first.child_sitemap_urls_from_robots.push("https://a.example/s.xml".into());
        first.warnings.insert(ScanWarning::DuplicateTitles);

        let second = ScanResult::new("b.example");
        assert!(second.child_sitemap_urls_from_robots.is_empty());
        assert!(second.warnings.is_empty());
    }

    #[test]
    fn test_estimate_index_time() {
        let mut result = ScanResult::new("example.com");
        result.sitemap_item_count = 700;
        result.set_total_urls(20);
        result.crawl_delay = Some(5.0);
        result.estimate_index_time();
        assert_eq!(result.total_url_count, 720);
        assert_eq!(result.estimated_index_hours, IndexEstimate::Hours(1.0));
    }

    #[test]
    fn test_estimate_uses_float_division() {
        let mut result = ScanResult::new("example.com");
        result.sitemap_item_count = 10;
        result.set_total_urls(0);
        result.crawl_delay = Some(1.0);
        result.estimate_index_time();
        match result.estimated_index_hours {
            IndexEstimate::Hours(hours) => assert!((hours - 10.0 / 3600.0).abs() < 1e-12),
            IndexEstimate::Unknown => panic!("estimate should be set"),
        }
    }

    #[test]
    fn test_estimate_unknown_without_crawl_delay() {
        let mut result = ScanResult::new("example.com");
        result.sitemap_item_count = 50_000;
        result.set_total_urls(10_000);
        result.estimate_index_time();
        assert_eq!(result.estimated_index_hours, IndexEstimate::Unknown);
        assert_eq!(result.estimated_index_hours.to_string(), "unknown");
    }

    #[test]
    fn test_landmark_flags_are_monotonic() {
        let mut result = ScanResult::new("example.com");
        result.record_main_landmark(true);
        result.record_main_landmark(false);
        result.record_search_control(false);
        result.record_search_control(true);
        result.record_search_control(false);
        assert!(result.main_landmark_found);
        assert!(result.search_control_found);
    }

    #[test]
    fn test_fetched_anything_counts_not_found_pages() {
        let mut result = ScanResult::new("example.com");
        result.per_page.insert(
            "/".to_string(),
            PageEntry::Error {
                message: "connection refused".to_string(),
            },
        );
        assert!(!result.fetched_anything());

        result
            .per_page
            .insert("/privacy".to_string(), PageEntry::NotFound { status: 404 });
        assert!(result.fetched_anything());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FetchStatus::Code(200).to_string(), "200");
        assert_eq!(FetchStatus::Failed("timed out".into()).to_string(), "timed out");
        assert_eq!(RobotsStatus::Ok.to_string(), "OK");
        assert_eq!(RobotsStatus::Code(404).to_string(), "404");
        assert_eq!(
            Platforms::Detected(vec!["Django".into()]).to_string(),
            "[\"Django\"]"
        );
    }

    #[test]
    fn test_page_entry_json_shape() {
        let entry = PageEntry::Audited(PageMetadata {
            title: Some("Home".into()),
            description: None,
            date: Some("2024-01-01".into()),
        });
        assert_eq!(
            to_json(&entry),
            r#"{"outcome":"audited","title":"Home","description":null,"date":"2024-01-01"}"#
        );
        assert_eq!(
            to_json(&PageEntry::NotFound { status: 404 }),
            r#"{"outcome":"not_found","status":404}"#
        );
    }
}
