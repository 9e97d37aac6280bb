//! Page audit.
//!
//! Fills the page half of a [`ScanResult`]: platform fingerprints, one
//! entry per audited page, the main-landmark and search-control flags, and
//! duplicate title/description warnings.

mod extract;

pub use extract::{
    extract_meta_description, extract_publish_date, extract_title, has_main_landmark,
    has_search_control,
};

use std::collections::HashSet;
use std::hash::Hash;

use log::{info, warn};
use scraper::Html;

use crate::config::{AUDITED_PAGES, HOME_PAGE};
use crate::error_handling::{ErrorType, FetchError, WarningType};
use crate::fetch::{fetch_document, FetchedDocument, ScanContext};
use crate::fingerprint::platforms_from;
use crate::models::{PageEntry, PageMetadata, Platforms, ScanResult, ScanWarning};

/// Signals read from one page body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageInspection {
    pub metadata: PageMetadata,
    pub main_landmark: bool,
    pub search_control: bool,
}

/// Parses `body` and extracts every on-page signal.
///
/// Landmark and search lookups are skipped when `check_landmark` /
/// `check_search` is false (already found on an earlier page).
pub fn inspect_page(body: &str, check_landmark: bool, check_search: bool) -> PageInspection {
    let document = Html::parse_document(body);
    PageInspection {
        metadata: PageMetadata {
            title: extract_title(&document),
            description: extract_meta_description(&document),
            date: extract_publish_date(&document),
        },
        main_landmark: check_landmark && has_main_landmark(&document),
        search_control: check_search && has_search_control(&document),
    }
}

/// True if any value occurs more than once.
pub fn has_duplicates<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|v| !seen.insert(v))
}

/// Fingerprints the home page response, whatever its status.
fn fingerprint_home(
    ctx: &ScanContext,
    fqd: &str,
    fetched: &Result<FetchedDocument, FetchError>,
) -> Platforms {
    match fetched {
        Ok(document) => {
            platforms_from(&ctx.fingerprinter.detect(&document.headers, &document.body))
        }
        Err(e) => {
            warn!("Platform lookup failed for {}: {}", fqd, e);
            ctx.stats.increment_error(ErrorType::FingerprintError);
            Platforms::Unknown
        }
    }
}

/// Runs the page pass for `fqd` over `AUDITED_PAGES`.
///
/// Each page is fetched once; the home page response also feeds the
/// platform fingerprint.
pub async fn audit_pages(ctx: &ScanContext, fqd: &str, result: &mut ScanResult) {
    info!("Page audit started for {}", fqd);

    let mut titles = Vec::new();
    let mut descriptions = Vec::new();

    for page in AUDITED_PAGES {
        let url = format!("{fqd}{page}");
        let fetched = fetch_document(&ctx.client, &url).await;
        if page == HOME_PAGE {
            result.platforms = fingerprint_home(ctx, fqd, &fetched);
        }
        let document = match fetched {
            Ok(document) => document,
            Err(e) => {
                warn!("Could not get data from {}: {}", url, e);
                ctx.stats.increment_error(ErrorType::PageFetchError);
                if e.is_timeout() {
                    ctx.stats.increment_error(ErrorType::RequestTimeout);
                }
                result.per_page.insert(
                    page.to_string(),
                    PageEntry::Error {
                        message: format!("Could not get data from {url}: {e}"),
                    },
                );
                continue;
            }
        };

        if !document.is_ok() {
            ctx.stats.increment_error(ErrorType::PageNotFound);
            result.per_page.insert(
                page.to_string(),
                PageEntry::NotFound {
                    status: document.status.as_u16(),
                },
            );
            continue;
        }

        let inspection = inspect_page(
            &document.body,
            !result.main_landmark_found,
            !result.search_control_found,
        );
        result.record_main_landmark(inspection.main_landmark);
        result.record_search_control(inspection.search_control);

        let metadata = inspection.metadata;
        match &metadata.title {
            Some(title) => titles.push(title.clone()),
            None => ctx.stats.increment_warning(WarningType::MissingTitle),
        }
        match &metadata.description {
            Some(description) => descriptions.push(description.clone()),
            None => ctx.stats.increment_warning(WarningType::MissingMetaDescription),
        }
        if metadata.date.is_none() {
            ctx.stats.increment_warning(WarningType::MissingPublishDate);
        }
        result
            .per_page
            .insert(page.to_string(), PageEntry::Audited(metadata));
    }

    if has_duplicates(&titles) {
        ctx.stats.increment_warning(WarningType::DuplicateTitles);
        result.warnings.insert(ScanWarning::DuplicateTitles);
    }
    if has_duplicates(&descriptions) {
        ctx.stats.increment_warning(WarningType::DuplicateDescriptions);
        result.warnings.insert(ScanWarning::DuplicateDescriptions);
    }

    info!("Page audit for {} complete", fqd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_duplicates() {
        assert!(has_duplicates(&["Home", "Home"]));
        assert!(!has_duplicates(&["Home", "Privacy Policy"]));
        assert!(!has_duplicates::<&str>(&[]));
        assert!(has_duplicates(&["a", "b", "a"]));
    }

    #[test]
    fn test_inspect_page_extracts_everything() {
        let body = r#"<html><head>
            <title>Home</title>
            <meta name="description" content="Welcome">
            <meta name="article:modified_time" content="2024-03-01T10:00:00Z">
            </head><body><main><input type="search"></main></body></html>"#;
        let inspection = inspect_page(body, true, true);
        assert_eq!(inspection.metadata.title.as_deref(), Some("Home"));
        assert_eq!(inspection.metadata.description.as_deref(), Some("Welcome"));
        assert_eq!(
            inspection.metadata.date.as_deref(),
            Some("2024-03-01T10:00:00Z")
        );
        assert!(inspection.main_landmark);
        assert!(inspection.search_control);
    }

    #[test]
    fn test_inspect_page_skips_latched_checks() {
        let body = "<html><body><main></main><div class='search'></div></body></html>";
        let inspection = inspect_page(body, false, false);
        assert!(!inspection.main_landmark);
        assert!(!inspection.search_control);
    }
}
