//! CSS selector parsing utilities.

use scraper::{ElementRef, Html, Selector};

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Parses an ordered list of selectors used as a fallback chain.
pub fn parse_selector_chain(selectors: &[&str], context: &str) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| parse_selector_unsafe(s, context))
        .collect()
}

/// Walks a fallback chain and returns the first element matched.
///
/// Each selector is tried independently, in order; later selectors are only
/// consulted when every earlier one matched nothing.
pub fn first_match<'a>(document: &'a Html, chain: &[Selector]) -> Option<ElementRef<'a>> {
    chain
        .iter()
        .find_map(|selector| document.select(selector).next())
}
