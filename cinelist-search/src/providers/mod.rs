//! Metadata provider implementations.

use async_trait::async_trait;
use cinelist_core::{DetailRecord, MediaId, SummaryRecord};

use crate::errors::{DetailError, SearchError};
use crate::query::SearchQuery;

pub mod demo;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod omdb;

pub use demo::DemoProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;
pub use omdb::OmdbProvider;

/// Source of title metadata.
///
/// Implementations back the search and detail clients with different
/// sources (the live API, the offline demo catalog, scripted test data).
#[async_trait]
pub trait MetadataProvider: Send + Sync + std::fmt::Debug {
    /// Looks up titles matching `query`, in the order the source returns them.
    ///
    /// # Errors
    /// - `SearchError::Network` - Transport failure or malformed response
    /// - `SearchError::NotFound` - Source reported no match, with its message
    async fn search_titles(&self, query: &SearchQuery) -> Result<Vec<SummaryRecord>, SearchError>;

    /// Fetches extended details for a single title.
    ///
    /// # Errors
    /// - `DetailError::Network` - Transport failure or malformed response
    /// - `DetailError::NotFound` - Source has no record for `id`
    async fn lookup_title(&self, id: &MediaId) -> Result<DetailRecord, DetailError>;
}
