//! robots.txt directive extraction.
//!
//! Only two directives matter here: the first `Crawl-delay` and every
//! `Sitemap`. Directive names match case-insensitively and must start a line
//! (leading whitespace allowed), so commented-out lines are skipped.
//!
//! Sites sometimes declare several crawl delays, e.g. one per user agent.
//! Only the first is used; later declarations are ignored even when they
//! differ.

use regex::Regex;
use std::sync::LazyLock;

static CRAWL_DELAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*crawl-delay[ \t]*:[ \t]*([^\r\n#]*)")
        .unwrap_or_else(|e| panic!("Invalid crawl-delay pattern: {e}"))
});

static SITEMAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*sitemap[ \t]*:[ \t]*(\S+)")
        .unwrap_or_else(|e| panic!("Invalid sitemap pattern: {e}"))
});

/// Directives read from a robots.txt body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RobotsDirectives {
    /// Raw value of the first `Crawl-delay` line, if any.
    pub raw_crawl_delay: Option<String>,
    /// `raw_crawl_delay` as positive seconds; `None` if absent or unparsable.
    pub crawl_delay: Option<f64>,
    /// Every `Sitemap:` URL, in file order.
    pub sitemaps: Vec<String>,
}

impl RobotsDirectives {
    /// True when a crawl-delay line exists but its value is not a positive number.
    pub fn crawl_delay_unparsable(&self) -> bool {
        self.raw_crawl_delay.is_some() && self.crawl_delay.is_none()
    }
}

/// Extracts the crawl-delay and sitemap declarations from `body`.
pub fn parse_robots(body: &str) -> RobotsDirectives {
    let raw_crawl_delay = CRAWL_DELAY_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());

    let crawl_delay = raw_crawl_delay.as_deref().and_then(parse_crawl_delay);

    let sitemaps = SITEMAP_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    RobotsDirectives {
        raw_crawl_delay,
        crawl_delay,
        sitemaps,
    }
}

fn parse_crawl_delay(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|delay| delay.is_finite() && *delay > 0.0)
}
