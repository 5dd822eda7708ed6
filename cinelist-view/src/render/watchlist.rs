//! Watchlist display units.

use cinelist_core::{MediaId, Poster, SummaryRecord};

/// Placeholder text shown when the watchlist has no entries.
pub const EMPTY_WATCHLIST_MESSAGE: &str = "No movies in watchlist.";

/// The single action a watchlist entry exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistAction {
    Remove(MediaId),
}

/// One display unit in the watchlist region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistUnit {
    /// Stands in for an empty watchlist
    Placeholder,
    /// A listed title with its remove action
    Entry {
        id: MediaId,
        title: String,
        poster: Poster,
    },
}

impl WatchlistUnit {
    pub fn action(&self) -> Option<WatchlistAction> {
        match self {
            WatchlistUnit::Placeholder => None,
            WatchlistUnit::Entry { id, .. } => Some(WatchlistAction::Remove(id.clone())),
        }
    }
}

/// Projects the watchlist contents; an empty list yields one placeholder unit.
pub fn render(entries: &[SummaryRecord]) -> Vec<WatchlistUnit> {
    if entries.is_empty() {
        return vec![WatchlistUnit::Placeholder];
    }

    entries
        .iter()
        .map(|entry| WatchlistUnit::Entry {
            id: entry.id.clone(),
            title: entry.title.clone(),
            poster: entry.poster.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> SummaryRecord {
        SummaryRecord {
            id: MediaId::new(id),
            title: format!("Title {id}"),
            year: "1999".to_string(),
            media_type: "movie".to_string(),
            poster: Poster::Missing,
        }
    }

    #[test]
    fn test_empty_watchlist_renders_placeholder() {
        let units = render(&[]);
        assert_eq!(units, vec![WatchlistUnit::Placeholder]);
        assert!(units[0].action().is_none());
    }

    #[test]
    fn test_entries_expose_remove_only() {
        let units = render(&[record("tt1"), record("tt2")]);

        assert_eq!(units.len(), 2);
        assert_eq!(
            units[1].action(),
            Some(WatchlistAction::Remove(MediaId::new("tt2")))
        );
    }
}
