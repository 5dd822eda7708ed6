//! Scripted provider for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use cinelist_core::{DetailRecord, MediaId, SummaryRecord};

use super::MetadataProvider;
use crate::errors::{DetailError, SearchError};
use crate::query::SearchQuery;

/// Provider returning canned outcomes and recording every call.
///
/// Unscripted queries answer `NotFound("Movie not found!")` and unscripted
/// ids answer `DetailError::NotFound`. Clones share state, so a test can keep
/// one handle for assertions while the clients own another.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    searches: HashMap<String, Result<Vec<SummaryRecord>, SearchError>>,
    lookups: HashMap<MediaId, Result<DetailRecord, DetailError>>,
    search_calls: Vec<String>,
    lookup_calls: Vec<MediaId>,
}

impl MockProvider {
    /// Creates a new mock provider for testing.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Scripts the outcome for a (trimmed) query.
    pub fn on_search(&self, query: &str, outcome: Result<Vec<SummaryRecord>, SearchError>) {
        self.state().searches.insert(query.trim().to_string(), outcome);
    }

    /// Scripts the outcome for an identifier lookup.
    pub fn on_lookup(&self, id: &str, outcome: Result<DetailRecord, DetailError>) {
        self.state().lookups.insert(MediaId::new(id), outcome);
    }

    /// Queries searched so far, in call order.
    pub fn search_calls(&self) -> Vec<String> {
        self.state().search_calls.clone()
    }

    /// Identifiers looked up so far, in call order.
    pub fn lookup_calls(&self) -> Vec<MediaId> {
        self.state().lookup_calls.clone()
    }
}

#[async_trait]
impl MetadataProvider for MockProvider {
    async fn search_titles(&self, query: &SearchQuery) -> Result<Vec<SummaryRecord>, SearchError> {
        let mut state = self.state();
        state.search_calls.push(query.as_str().to_string());
        state
            .searches
            .get(query.as_str())
            .cloned()
            .unwrap_or_else(|| {
                Err(SearchError::NotFound {
                    message: "Movie not found!".to_string(),
                })
            })
    }

    async fn lookup_title(&self, id: &MediaId) -> Result<DetailRecord, DetailError> {
        let mut state = self.state();
        state.lookup_calls.push(id.clone());
        state
            .lookups
            .get(id)
            .cloned()
            .unwrap_or(Err(DetailError::NotFound))
    }
}
