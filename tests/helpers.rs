// Shared test helpers for mock servers and scan contexts.

use seo_status::{Config, LogFormat, LogLevel, ScanContext};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config tuned for tests: short timeout, quiet logging.
#[allow(dead_code)] // Not every test file uses every helper
pub fn test_config() -> Config {
    Config {
        timeout_seconds: 2,
        user_agent: "seo_status_test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Fresh context with its own stats.
#[allow(dead_code)]
pub fn test_context() -> ScanContext {
    ScanContext::from_config(&test_config()).expect("Failed to build scan context")
}

/// A base URL nothing listens on.
#[allow(dead_code)]
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Builds a `<urlset>` with `count` entries under `base`.
#[allow(dead_code)]
pub fn urlset(base: &str, count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for i in 0..count {
        xml.push_str(&format!("<url><loc>{base}/page-{i}</loc></url>"));
    }
    xml.push_str("</urlset>");
    xml
}

/// Builds a `<sitemapindex>` listing `locations`.
#[allow(dead_code)]
pub fn sitemap_index(locations: &[String]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for loc in locations {
        xml.push_str(&format!("<sitemap><loc>{loc}</loc></sitemap>"));
    }
    xml.push_str("</sitemapindex>");
    xml
}

/// Serves `body` with status 200 at `route`.
#[allow(dead_code)]
pub async fn serve(server: &MockServer, route: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
        .mount(server)
        .await;
}

/// Serves an empty response with `status` at `route`.
#[allow(dead_code)]
pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
