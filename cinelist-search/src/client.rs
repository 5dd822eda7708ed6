//! Search and detail clients used by the interaction controller.
//!
//! Both clients are cheap to clone and share one provider, so a request
//! future can own its client and outlive the handler that started it.

use std::sync::Arc;

use cinelist_core::{CinelistConfig, DetailRecord, MediaId, RuntimeMode, SummaryRecord};
use tracing::{info, warn};

use crate::errors::{DetailError, SearchError};
use crate::providers::{DemoProvider, MetadataProvider, OmdbProvider};
use crate::query::SearchQuery;

/// Picks the provider for the configured runtime mode.
///
/// # Errors
///
/// - `CinelistError::Configuration` - Production settings are incomplete or invalid
pub fn provider_for(config: &CinelistConfig) -> cinelist_core::Result<Arc<dyn MetadataProvider>> {
    config.validate()?;
    match config.mode {
        RuntimeMode::Production => Ok(Arc::new(OmdbProvider::from_config(config)?)),
        RuntimeMode::Development => Ok(Arc::new(DemoProvider::new())),
    }
}

/// Looks up titles by search text.
#[derive(Debug, Clone)]
pub struct SearchClient {
    provider: Arc<dyn MetadataProvider>,
}

impl SearchClient {
    /// Creates a search client backed by `provider`.
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Search titles matching `query`, preserving the provider's order.
    ///
    /// # Errors
    /// - `SearchError::Network` - Transport failure or malformed response
    /// - `SearchError::NotFound` - No match, carrying the provider's message
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SummaryRecord>, SearchError> {
        match self.provider.search_titles(query).await {
            Ok(records) => {
                info!(%query, count = records.len(), "Search completed");
                Ok(records)
            }
            Err(e) => {
                warn!(%query, error = %e, "Search failed");
                Err(e)
            }
        }
    }
}

/// Fetches details for one title. Every call goes to the provider.
#[derive(Debug, Clone)]
pub struct DetailClient {
    provider: Arc<dyn MetadataProvider>,
}

impl DetailClient {
    /// Creates a details client backed by `provider`.
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch plot, rating, and cast for `id`.
    ///
    /// # Errors
    /// - `DetailError::Network` - Transport failure or malformed response
    /// - `DetailError::NotFound` - Provider has no record for `id`
    pub async fn fetch_details(&self, id: &MediaId) -> Result<DetailRecord, DetailError> {
        let outcome = self.provider.lookup_title(id).await;
        if let Err(ref e) = outcome {
            warn!(%id, error = %e, "Detail fetch failed");
        }
        outcome
    }
}
