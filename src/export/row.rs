//! Flattening of a `ScanResult` into one CSV row.
//!
//! Scalars are written as-is, absent values as empty cells, and list or
//! map fields as JSON.

use crate::models::{to_json, ScanResult};

/// Column names, in output order.
pub const CSV_HEADERS: [&str; 17] = [
    "domain",
    "platforms",
    "sitemap_status",
    "sitemap_final_url",
    "sitemap_item_count",
    "pdf_item_count",
    "child_sitemap_urls_from_index",
    "robots_status",
    "crawl_delay",
    "child_sitemap_urls_from_robots",
    "total_url_count",
    "estimated_index_hours",
    "main_landmark_found",
    "search_control_found",
    "per_page",
    "warnings",
    "fetched_anything",
];

fn optional<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Builds the row for `result`, aligned with [`CSV_HEADERS`].
pub fn build_row(result: &ScanResult) -> Vec<String> {
    let warnings: Vec<&str> = result.warnings.iter().map(|w| w.as_str()).collect();
    vec![
        result.domain.clone(),
        result.platforms.to_string(),
        optional(result.sitemap_status.as_ref()),
        optional(result.sitemap_final_url.as_ref()),
        result.sitemap_item_count.to_string(),
        result.pdf_item_count.to_string(),
        to_json(&result.child_sitemap_urls_from_index),
        optional(result.robots_status.as_ref()),
        optional(result.crawl_delay.as_ref()),
        to_json(&result.child_sitemap_urls_from_robots),
        result.total_url_count.to_string(),
        result.estimated_index_hours.to_string(),
        result.main_landmark_found.to_string(),
        result.search_control_found.to_string(),
        to_json(&result.per_page),
        to_json(&warnings),
        result.fetched_anything().to_string(),
    ]
}
