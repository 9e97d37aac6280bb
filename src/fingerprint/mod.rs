//! Platform fingerprinting.
//!
//! Identifies the technologies behind a domain by matching its home page
//! response headers, cookies, `<meta name="generator">` and HTML
//! markers against a ruleset. Results are grouped by category, the same
//! shape a hosted fingerprint service returns; the scanner only keeps the
//! `web-frameworks` category.

mod rules;

pub use rules::{PlatformRule, DEFAULT_RULES, WEB_FRAMEWORKS};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use reqwest::header::{HeaderMap, SET_COOKIE};
use scraper::{Html, Selector};

use crate::models::Platforms;
use crate::utils::parse_selector_unsafe;

static GENERATOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name=generator i]", "GENERATOR_SELECTOR"));

/// Category name -> detected technology names (in ruleset order).
pub type TechnologyMap = BTreeMap<String, Vec<String>>;

struct CompiledRule {
    name: &'static str,
    category: &'static str,
    headers: Vec<(&'static str, Option<Regex>)>,
    cookies: &'static [&'static str],
    generator: Option<Regex>,
    html: Vec<Regex>,
}

/// Matches responses against a compiled ruleset.
pub struct Fingerprinter {
    rules: Vec<CompiledRule>,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::from_rules(DEFAULT_RULES)
    }
}

fn compile(pattern: &str, rule: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| log::error!("Skipping invalid pattern '{}' for {}: {}", pattern, rule, e))
        .ok()
}

impl Fingerprinter {
    /// Compiles `rules`. Invalid patterns are logged and dropped; the rest
    /// of their rule still applies.
    pub fn from_rules(rules: &[PlatformRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledRule {
                name: rule.name,
                category: rule.category,
                headers: rule
                    .headers
                    .iter()
                    .filter_map(|(header, pattern)| {
                        if pattern.is_empty() {
                            Some((*header, None))
                        } else {
                            compile(pattern, rule.name).map(|re| (*header, Some(re)))
                        }
                    })
                    .collect(),
                cookies: rule.cookies,
                generator: rule.generator.and_then(|p| compile(p, rule.name)),
                html: rule
                    .html
                    .iter()
                    .filter_map(|p| compile(p, rule.name))
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    /// Fingerprints one response.
    pub fn detect(&self, headers: &HeaderMap, body: &str) -> TechnologyMap {
        let cookies = cookie_names(headers);
        let generator = meta_generator(body);

        let mut found = TechnologyMap::new();
        for rule in &self.rules {
            let by_header = rule.headers.iter().any(|(name, pattern)| {
                headers.get_all(*name).iter().any(|value| {
                    let value = value.to_str().unwrap_or_default();
                    pattern.as_ref().map_or(true, |re| re.is_match(value))
                })
            });
            let by_cookie = rule
                .cookies
                .iter()
                .any(|c| cookies.iter().any(|name| name.eq_ignore_ascii_case(c)));
            let by_generator = match (&rule.generator, &generator) {
                (Some(re), Some(content)) => re.is_match(content),
                _ => false,
            };
            let by_html = rule.html.iter().any(|re| re.is_match(body));

            if by_header || by_cookie || by_generator || by_html {
                log::debug!("Detected {} ({})", rule.name, rule.category);
                let names = found.entry(rule.category.to_string()).or_default();
                if !names.iter().any(|n| n == rule.name) {
                    names.push(rule.name.to_string());
                }
            }
        }
        found
    }
}

/// Reduces a technology map to the `platforms` field value.
pub fn platforms_from(technologies: &TechnologyMap) -> Platforms {
    match technologies.get(WEB_FRAMEWORKS) {
        Some(names) if !names.is_empty() => Platforms::Detected(names.clone()),
        _ => Platforms::Unknown,
    }
}

fn cookie_names(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|cookie| cookie.split('=').next())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn meta_generator(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    document
        .select(&GENERATOR_SELECTOR)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
}
