//! On-page signal extraction.
//!
//! All lookups are CSS selectors over a `scraper::Html` document. Lookups
//! with alternatives (publish date, main landmark, search control) are
//! ordered fallback chains: each selector is tried in turn and the first
//! match wins.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::{first_match, parse_selector_chain, parse_selector_unsafe};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name='description']", "META_DESCRIPTION_SELECTOR"));

static PUBLISH_DATE_CHAIN: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_selector_chain(
        &[
            "meta[name='article:published_time']",
            "meta[name='article:modified_time']",
            "meta[name='DC.Date']",
        ],
        "PUBLISH_DATE_CHAIN",
    )
});

static MAIN_LANDMARK_CHAIN: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selector_chain(&["main", "[role=main]"], "MAIN_LANDMARK_CHAIN"));

static SEARCH_CONTROL_CHAIN: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_selector_chain(
        &["input[type='search']", "[class*='search']"],
        "SEARCH_CONTROL_CHAIN",
    )
});

/// Extracts the text of the first `<title>`, trimmed.
///
/// Returns `None` when there is no title or it is blank.
pub fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Extracts the `content` of `<meta name="description">`, trimmed.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Extracts the publish or modify date.
///
/// Tries `article:published_time`, then `article:modified_time`, then
/// `DC.Date`. The first tag present wins, even if its `content` is missing.
pub fn extract_publish_date(document: &Html) -> Option<String> {
    first_match(document, &PUBLISH_DATE_CHAIN)
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// True if the page has a `<main>` element or, failing that, any `role="main"` element.
pub fn has_main_landmark(document: &Html) -> bool {
    first_match(document, &MAIN_LANDMARK_CHAIN).is_some()
}

/// True if the page has an `<input type="search">` or, failing that, any
/// element whose class attribute contains "search".
pub fn has_search_control(document: &Html) -> bool {
    first_match(document, &SEARCH_CONTROL_CHAIN).is_some()
}
