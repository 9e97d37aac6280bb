//! Sitemap document parsing.
//!
//! Sitemaps are parsed with the HTML-tolerant `scraper` parser rather than a
//! strict XML reader, so documents with stray markup, missing namespaces or
//! broken closing tags still yield counts.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

static URL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("url", "URL_SELECTOR"));
static SITEMAP_INDEX_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("sitemapindex", "SITEMAP_INDEX_SELECTOR"));
static INDEX_LOC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("sitemap > loc", "INDEX_LOC_SELECTOR"));

/// Counts and child locations read from one sitemap document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    /// Number of `<url>` entries.
    pub url_count: usize,
    /// `<url>` entries whose text contains `.pdf` (case-sensitive).
    pub pdf_count: usize,
    /// `<sitemap><loc>` values in document order, blank ones included;
    /// empty unless the document is a `<sitemapindex>`.
    pub index_locations: Vec<String>,
}

impl SitemapDocument {
    pub fn is_index(&self) -> bool {
        !self.index_locations.is_empty()
    }
}

/// Parses a sitemap or sitemap index body.
pub fn parse_sitemap(body: &str) -> SitemapDocument {
    let document = Html::parse_document(body);

    let mut url_count = 0;
    let mut pdf_count = 0;
    for url in document.select(&URL_SELECTOR) {
        url_count += 1;
        if url.text().collect::<String>().contains(".pdf") {
            pdf_count += 1;
        }
    }

    let index_locations = if document.select(&SITEMAP_INDEX_SELECTOR).next().is_some() {
        document
            .select(&INDEX_LOC_SELECTOR)
            .map(|loc| loc.text().collect::<String>().trim().to_string())
            .collect()
    } else {
        Vec::new()
    };

    log::debug!(
        "Parsed sitemap: {} url entries ({} pdf), {} index locations",
        url_count,
        pdf_count,
        index_locations.len()
    );

    SitemapDocument {
        url_count,
        pdf_count,
        index_locations,
    }
}

/// Counts `<url>` entries in a child sitemap.
pub fn count_urls(body: &str) -> usize {
    let document = Html::parse_document(body);
    document.select(&URL_SELECTOR).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URLSET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc><lastmod>2024-01-01</lastmod></url>
  <url><loc>https://example.com/about</loc></url>
  <url><loc>https://example.com/files/report.pdf</loc></url>
  <url><loc>https://example.com/files/REPORT.PDF</loc></url>
</urlset>"#;

    const INDEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://example.com/sitemap-pages.xml</loc></sitemap>
  <sitemap><loc> https://example.com/sitemap-posts.xml </loc><lastmod>2024-02-01</lastmod></sitemap>
  <sitemap><loc>https://example.com/sitemap-files.xml</loc></sitemap>
</sitemapindex>"#;

    #[test]
    fn test_parse_urlset_counts() {
        let doc = parse_sitemap(URLSET);
        assert_eq!(doc.url_count, 4);
        // ".PDF" does not match: the check is case-sensitive
        assert_eq!(doc.pdf_count, 1);
        assert!(doc.index_locations.is_empty());
        assert!(!doc.is_index());
    }

    #[test]
    fn test_parse_index_preserves_order() {
        let doc = parse_sitemap(INDEX);
        assert_eq!(doc.url_count, 0);
        assert_eq!(
            doc.index_locations,
            vec![
                "https://example.com/sitemap-pages.xml",
                "https://example.com/sitemap-posts.xml",
                "https://example.com/sitemap-files.xml",
            ]
        );
        assert!(doc.is_index());
    }

    #[test]
    fn test_blank_index_loc_is_kept() {
        let body = r#"<sitemapindex>
  <sitemap><loc>https://example.com/a.xml</loc></sitemap>
  <sitemap><loc></loc></sitemap>
  <sitemap><loc>https://example.com/b.xml</loc></sitemap>
</sitemapindex>"#;
        assert_eq!(
            parse_sitemap(body).index_locations,
            vec!["https://example.com/a.xml", "", "https://example.com/b.xml"]
        );
    }

    #[test]
    fn test_loc_outside_index_is_ignored() {
        // <sitemap><loc> only counts inside a <sitemapindex> root
        let body = r#"<urlset><sitemap><loc>https://example.com/x.xml</loc></sitemap></urlset>"#;
        assert!(parse_sitemap(body).index_locations.is_empty());
    }

    #[test]
    fn test_parse_tolerates_malformed_markup() {
        let body = r#"<urlset><url><loc>https://example.com/a</loc><url><loc>https://example.com/b.pdf</loc></url>"#;
        let doc = parse_sitemap(body);
        assert_eq!(doc.url_count, 2);
        assert!(doc.pdf_count >= 1);
    }

    #[test]
    fn test_parse_non_sitemap_body() {
        let doc = parse_sitemap("<html><body><h1>Not found</h1></body></html>");
        assert_eq!(doc, SitemapDocument::default());
    }

    #[test]
    fn test_count_urls() {
        assert_eq!(count_urls(URLSET), 4);
        assert_eq!(count_urls(INDEX), 0);
        assert_eq!(count_urls(""), 0);
    }
}
