//! Shared resources for scanning domains.

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::fingerprint::Fingerprinter;
use crate::initialization::init_client;

/// Context containing all shared resources needed to scan a domain.
///
/// Cheap to clone; nothing in it is specific to one domain, so scan records
/// never leak between domains through it.
#[derive(Clone)]
pub struct ScanContext {
    /// HTTP client (redirects followed, uniform timeout)
    pub client: Arc<reqwest::Client>,
    /// Platform fingerprinting collaborator
    pub fingerprinter: Arc<Fingerprinter>,
    /// Error statistics tracker
    pub stats: Arc<ProcessingStats>,
}

impl ScanContext {
    /// Creates a new `ScanContext` with the given resources.
    pub fn new(
        client: Arc<reqwest::Client>,
        fingerprinter: Arc<Fingerprinter>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            fingerprinter,
            stats,
        }
    }

    /// Builds the HTTP client and default fingerprint ruleset from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::new(
            client,
            Arc::new(Fingerprinter::default()),
            Arc::new(ProcessingStats::new()),
        ))
    }
}
