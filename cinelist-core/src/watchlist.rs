//! Session watchlist: an ordered, de-duplicated set of summary records.
//!
//! Entries are keyed by [`MediaId`] and kept in insertion order for display.
//! `add` and `remove` are the only mutators; nothing is persisted.

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{MediaId, SummaryRecord};

/// Returned by [`WatchlistStore::add`] when the title is already listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{title}' ({id}) is already in the watchlist")]
pub struct AlreadyExists {
    pub id: MediaId,
    pub title: String,
}

impl AlreadyExists {
    /// Notice shown to the user for a duplicate add.
    pub fn user_message(&self) -> &'static str {
        "Movie already in watchlist."
    }
}

/// In-memory watchlist owned by the interaction controller.
#[derive(Debug, Clone, Default)]
pub struct WatchlistStore {
    entries: Vec<SummaryRecord>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` unless an entry with the same id exists.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` - An entry with `record.id` is already present; the store is unchanged
    pub fn add(&mut self, record: SummaryRecord) -> Result<(), AlreadyExists> {
        if self.contains(&record.id) {
            debug!(id = %record.id, "Duplicate watchlist add rejected");
            return Err(AlreadyExists {
                id: record.id,
                title: record.title,
            });
        }

        info!(id = %record.id, title = %record.title, "Added to watchlist");
        self.entries.push(record);
        Ok(())
    }

    /// Removes the entry with `id`, returning it. Absent ids are a no-op.
    pub fn remove(&mut self, id: &MediaId) -> Option<SummaryRecord> {
        let position = self.entries.iter().position(|entry| &entry.id == id)?;
        let removed = self.entries.remove(position);
        info!(id = %removed.id, title = %removed.title, "Removed from watchlist");
        Some(removed)
    }

    /// Current entries in insertion order.
    pub fn list(&self) -> &[SummaryRecord] {
        &self.entries
    }

    pub fn contains(&self, id: &MediaId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
