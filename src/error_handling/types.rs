//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Transport-level failure of a single fetch.
///
/// Non-OK HTTP statuses are not errors: they come back as a normal
/// `FetchedDocument` and the caller decides what a 404 means.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed (e.g. a relative `<loc>` in a sitemap).
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Timeout, DNS, connection or body read failure.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The response body exceeded `MAX_RESPONSE_BODY_SIZE`.
    #[error("response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: usize },
}

impl FetchError {
    /// True when the failure was a timeout rather than a refused/unresolvable host.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request { source, .. } if source.is_timeout())
    }
}

/// Types of errors that can occur while scanning a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    SitemapFetchError,
    RobotsFetchError,
    ChildSitemapFetchError,
    ChildSitemapStatusError,
    PageFetchError,
    PageNotFound,
    FingerprintError,
    RequestTimeout,
    InvalidDomain,
}

/// Missing optional data that doesn't prevent a domain from being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    MissingPublishDate,
    DuplicateTitles,
    DuplicateDescriptions,
    UnparsableCrawlDelay,
}

/// Notable findings that are neither errors nor warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    SitemapIndex,
    SitemapRedirect,
    RobotsSitemapDeclared,
    CrawlDelayDeclared,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::SitemapFetchError => "Sitemap fetch error",
            ErrorType::RobotsFetchError => "robots.txt fetch error",
            ErrorType::ChildSitemapFetchError => "Child sitemap fetch error",
            ErrorType::ChildSitemapStatusError => "Child sitemap non-OK status",
            ErrorType::PageFetchError => "Page fetch error",
            ErrorType::PageNotFound => "Page not found",
            ErrorType::FingerprintError => "Platform fingerprint error",
            ErrorType::RequestTimeout => "Request timeout",
            ErrorType::InvalidDomain => "Invalid domain",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::MissingPublishDate => "Missing publish/modified date",
            WarningType::DuplicateTitles => "Duplicate titles",
            WarningType::DuplicateDescriptions => "Duplicate descriptions",
            WarningType::UnparsableCrawlDelay => "Unparsable crawl-delay",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::SitemapIndex => "Sitemap index",
            InfoType::SitemapRedirect => "Sitemap redirected",
            InfoType::RobotsSitemapDeclared => "Sitemap declared in robots.txt",
            InfoType::CrawlDelayDeclared => "Crawl-delay declared",
        }
    }
}
