//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`thiserror`)
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Counters are categorized into:
//! - **Errors**: Failed fetches and invalid input
//! - **Warnings**: Missing or duplicated optional metadata
//! - **Info**: Informational findings (sitemap index, redirects, etc.)

mod stats;
mod types;

pub use stats::ProcessingStats;
pub use types::{ErrorType, FetchError, InfoType, InitializationError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ChildSitemapFetchError);
        stats.increment_error(ErrorType::ChildSitemapFetchError);
        assert_eq!(stats.get_error_count(ErrorType::ChildSitemapFetchError), 2);

        stats.increment_warning(WarningType::DuplicateTitles);
        assert_eq!(stats.get_warning_count(WarningType::DuplicateTitles), 1);

        stats.increment_info(InfoType::SitemapIndex);
        assert_eq!(stats.get_info_count(InfoType::SitemapIndex), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::PageNotFound);
        stats.increment_error(ErrorType::RequestTimeout);
        stats.increment_warning(WarningType::MissingMetaDescription);
        stats.increment_info(InfoType::CrawlDelayDeclared);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }
}
