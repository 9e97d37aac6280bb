//! Sitemap and robots.txt resolution.
//!
//! Fills the sitemap half of a [`ScanResult`]:
//! 1. fetch `{fqd}/sitemap.xml`, count `<url>`/PDF entries, collect index children
//! 2. fetch `{fqd}/robots.txt`, read the first crawl-delay and every declared sitemap
//! 3. fetch each distinct child sitemap (except the primary's final URL) and add its count
//! 4. derive the total URL count and the index-time estimate
//!
//! Failures of the primary sitemap or robots.txt are recorded in the result;
//! child sitemap failures are skipped and counted in `ProcessingStats`.

mod parse;
mod robots;

use parse::{count_urls, parse_sitemap};
use robots::parse_robots;

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::config::{ROBOTS_PATH, SITEMAP_PATH};
use crate::error_handling::{ErrorType, FetchError, InfoType, WarningType};
use crate::fetch::{fetch_document, ScanContext};
use crate::models::{FetchStatus, RobotsStatus, ScanResult};

/// Runs the sitemap pass for `fqd` (scheme + host, no trailing slash).
pub async fn resolve_sitemaps(ctx: &ScanContext, fqd: &str, result: &mut ScanResult) {
    info!("Sitemap scan started for {}", fqd);

    scan_primary_sitemap(ctx, fqd, result).await;
    scan_robots(ctx, fqd, result).await;

    let children = child_sitemaps_to_fetch(result);
    if !children.is_empty() {
        info!("Checking {} additional sitemap(s) for {}", children.len(), fqd);
    }
    let mut additional_urls = 0usize;
    for child in &children {
        if let Some(count) = fetch_child_count(ctx, child).await {
            additional_urls += count;
        }
    }

    result.set_total_urls(additional_urls);
    result.estimate_index_time();

    info!(
        "Sitemap scan for {} complete: {} URL(s), estimated index time {}",
        fqd, result.total_url_count, result.estimated_index_hours
    );
}

async fn scan_primary_sitemap(ctx: &ScanContext, fqd: &str, result: &mut ScanResult) {
    let url = format!("{fqd}{SITEMAP_PATH}");
    let document = match fetch_document(&ctx.client, &url).await {
        Ok(document) => document,
        Err(e) => {
            warn!("Could not get data from {}: {}", url, e);
            record_fetch_error(ctx, ErrorType::SitemapFetchError, &e);
            result.sitemap_status = Some(FetchStatus::Failed(format!(
                "Could not get data from {url}: {e}"
            )));
            return;
        }
    };

    result.sitemap_status = Some(FetchStatus::Code(document.status.as_u16()));
    if document.final_url != url {
        ctx.stats.increment_info(InfoType::SitemapRedirect);
    }
    result.sitemap_final_url = Some(document.final_url.clone());

    if !document.is_ok() {
        debug!("Sitemap {} returned {}", url, document.status);
        return;
    }

    let sitemap = parse_sitemap(&document.body);
    result.sitemap_item_count = sitemap.url_count;
    result.pdf_item_count = sitemap.pdf_count;
    if sitemap.is_index() {
        ctx.stats.increment_info(InfoType::SitemapIndex);
    }
    result.child_sitemap_urls_from_index = sitemap.index_locations;
}

async fn scan_robots(ctx: &ScanContext, fqd: &str, result: &mut ScanResult) {
    let url = format!("{fqd}{ROBOTS_PATH}");
    let document = match fetch_document(&ctx.client, &url).await {
        Ok(document) => document,
        Err(e) => {
            warn!("Error fetching robots.txt for {}: {}", fqd, e);
            record_fetch_error(ctx, ErrorType::RobotsFetchError, &e);
            result.robots_status = Some(RobotsStatus::Failed(format!(
                "Could not get data from {url}: {e}"
            )));
            return;
        }
    };

    if !document.is_ok() {
        result.robots_status = Some(RobotsStatus::Code(document.status.as_u16()));
        return;
    }
    result.robots_status = Some(RobotsStatus::Ok);

    let directives = parse_robots(&document.body);
    if directives.crawl_delay_unparsable() {
        warn!(
            "Ignoring unparsable crawl-delay {:?} in {}",
            directives.raw_crawl_delay.as_deref().unwrap_or_default(),
            url
        );
        ctx.stats.increment_warning(WarningType::UnparsableCrawlDelay);
    }
    if directives.crawl_delay.is_some() {
        ctx.stats.increment_info(InfoType::CrawlDelayDeclared);
    }
    if !directives.sitemaps.is_empty() {
        ctx.stats.increment_info(InfoType::RobotsSitemapDeclared);
    }
    result.crawl_delay = directives.crawl_delay;
    result.child_sitemap_urls_from_robots = directives.sitemaps;
}

/// Distinct child sitemaps (index entries first, then robots.txt) minus the
/// primary sitemap's final URL and blank entries.
fn child_sitemaps_to_fetch(result: &ScanResult) -> Vec<String> {
    let primary = result.sitemap_final_url.as_deref();
    let mut seen = HashSet::new();
    result
        .child_sitemap_urls_from_index
        .iter()
        .chain(result.child_sitemap_urls_from_robots.iter())
        .filter(|loc| !loc.trim().is_empty())
        .filter(|loc| !primary.is_some_and(|primary| same_url(loc, primary)))
        .filter(|loc| seen.insert(normalized(loc)))
        .cloned()
        .collect()
}

/// Fetches one child sitemap and returns its `<url>` count, or `None` when it
/// could not be read.
async fn fetch_child_count(ctx: &ScanContext, url: &str) -> Option<usize> {
    match fetch_document(&ctx.client, url).await {
        Ok(document) if document.is_ok() => {
            let count = count_urls(&document.body);
            debug!("Child sitemap {} lists {} URL(s)", url, count);
            Some(count)
        }
        Ok(document) => {
            warn!("Skipping child sitemap {}: status {}", url, document.status);
            ctx.stats.increment_error(ErrorType::ChildSitemapStatusError);
            None
        }
        Err(e) => {
            warn!("Skipping child sitemap {}: {}", url, e);
            record_fetch_error(ctx, ErrorType::ChildSitemapFetchError, &e);
            None
        }
    }
}

fn record_fetch_error(ctx: &ScanContext, error_type: ErrorType, error: &FetchError) {
    ctx.stats.increment_error(error_type);
    if error.is_timeout() {
        ctx.stats.increment_error(ErrorType::RequestTimeout);
    }
}

/// Canonical form used for URL comparison (`https://Example.com:443/x` ==
/// `https://example.com/x`); unparsable strings compare verbatim.
fn normalized(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| url.to_string())
}

fn same_url(a: &str, b: &str) -> bool {
    normalized(a) == normalized(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_exclude_primary_final_url() {
        let mut result = ScanResult::new("example.com");
        result.sitemap_final_url = Some("https://example.com/sitemap.xml".to_string());
        result.child_sitemap_urls_from_index = vec!["https://example.com/posts.xml".to_string()];
        result.child_sitemap_urls_from_robots = vec![
            "https://example.com/sitemap.xml".to_string(),
            "https://EXAMPLE.com:443/sitemap.xml".to_string(),
            "https://example.com/pages.xml".to_string(),
        ];
        assert_eq!(
            child_sitemaps_to_fetch(&result),
            vec![
                "https://example.com/posts.xml".to_string(),
                "https://example.com/pages.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_children_deduplicated_across_sources() {
        let mut result = ScanResult::new("example.com");
        result.child_sitemap_urls_from_index = vec![
            "https://example.com/a.xml".to_string(),
            "https://example.com/b.xml".to_string(),
        ];
        result.child_sitemap_urls_from_robots = vec![
            "https://example.com/b.xml".to_string(),
            "https://example.com/a.xml".to_string(),
            "https://example.com/c.xml".to_string(),
        ];
        assert_eq!(
            child_sitemaps_to_fetch(&result),
            vec![
                "https://example.com/a.xml".to_string(),
                "https://example.com/b.xml".to_string(),
                "https://example.com/c.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_children_are_not_fetched() {
        let mut result = ScanResult::new("example.com");
        result.child_sitemap_urls_from_index = vec![
            "https://example.com/a.xml".to_string(),
            String::new(),
            "https://example.com/b.xml".to_string(),
        ];
        result.child_sitemap_urls_from_robots = vec!["  ".to_string()];
        assert_eq!(
            child_sitemaps_to_fetch(&result),
            vec![
                "https://example.com/a.xml".to_string(),
                "https://example.com/b.xml".to_string(),
            ]
        );
        assert_eq!(result.child_sitemap_urls_from_index.len(), 3);
    }

    #[test]
    fn test_children_kept_when_primary_unknown() {
        let mut result = ScanResult::new("example.com");
        result.child_sitemap_urls_from_robots = vec!["https://example.com/sitemap.xml".to_string()];
        assert_eq!(child_sitemaps_to_fetch(&result).len(), 1);
    }

    #[test]
    fn test_same_url_normalizes() {
        assert!(same_url("https://example.com", "https://example.com/"));
        assert!(same_url("not a url", "not a url"));
        assert!(!same_url("https://example.com/a.xml", "https://example.com/b.xml"));
    }
}
