//! Domain list parsing and normalization.

use log::warn;

use crate::config::MAX_DOMAIN_LENGTH;

/// Splits a comma-separated domain list.
///
/// Entries are trimmed; empty entries (`a.com,,b.com`, trailing commas) are
/// dropped. Order and duplicates are kept.
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns a domain into the base URL every fetch is built on.
///
/// Adds `https://` when no scheme is given, validates the result, and keeps
/// only scheme, host and port so paths like `/sitemap.xml` can be appended
/// directly. Any path, query or fragment in the input is dropped.
/// Logs a warning and returns `None` if the domain is unusable.
pub fn to_fully_qualified(domain: &str) -> Option<String> {
    let candidate = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };

    let parsed = match url::Url::parse(&candidate) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Skipping invalid domain {:?}: {}", domain, e);
            return None;
        }
    };

    let host = match parsed.host_str() {
        Some(host) if host.len() <= MAX_DOMAIN_LENGTH => host,
        Some(host) => {
            warn!(
                "Skipping domain with host longer than {} characters: {}...",
                MAX_DOMAIN_LENGTH,
                &host[..50.min(host.len())]
            );
            return None;
        }
        None => {
            warn!("Skipping domain without a host: {:?}", domain);
            return None;
        }
    };

    let port = parsed.port().map(|p| format!(":{p}")).unwrap_or_default();
    Some(format!("{}://{}{}", parsed.scheme(), host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_list_splits_and_trims() {
        assert_eq!(
            parse_domain_list("example.com, example.org ,example.net"),
            vec!["example.com", "example.org", "example.net"]
        );
    }

    #[test]
    fn test_parse_domain_list_drops_empty_entries() {
        assert_eq!(
            parse_domain_list("a.com,,b.com,"),
            vec!["a.com", "b.com"]
        );
        assert!(parse_domain_list("").is_empty());
        assert!(parse_domain_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_domain_list_keeps_order_and_duplicates() {
        assert_eq!(
            parse_domain_list("b.com,a.com,b.com"),
            vec!["b.com", "a.com", "b.com"]
        );
    }

    #[test]
    fn test_to_fully_qualified_adds_https() {
        assert_eq!(
            to_fully_qualified("example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_to_fully_qualified_keeps_scheme_and_port() {
        assert_eq!(
            to_fully_qualified("http://127.0.0.1:8080"),
            Some("http://127.0.0.1:8080".to_string())
        );
        assert_eq!(
            to_fully_qualified("https://example.com/"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_to_fully_qualified_drops_path_and_query() {
        assert_eq!(
            to_fully_qualified("example.com/blog?page=2"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            to_fully_qualified("http://127.0.0.1:8080/shop/#top"),
            Some("http://127.0.0.1:8080".to_string())
        );
        assert_eq!(
            to_fully_qualified("https://example.com:443/a/b"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_to_fully_qualified_rejects_invalid() {
        assert_eq!(to_fully_qualified("not a domain!!!"), None);
        assert_eq!(to_fully_qualified("exa mple.com"), None);
    }

    #[test]
    fn test_to_fully_qualified_rejects_long_host() {
        let long = format!("{}.com", "a".repeat(260));
        assert_eq!(to_fully_qualified(&long), None);
    }
}
