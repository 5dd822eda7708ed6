//! Result cards and their details panels.

use cinelist_core::{DetailRecord, SummaryRecord};
use cinelist_search::DetailError;

/// Outcome of the last details fetch for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    Loaded(DetailRecord),
    Failed(DetailError),
}

impl DetailContent {
    /// Only successfully loaded details offer a close button.
    pub fn has_close_action(&self) -> bool {
        matches!(self, DetailContent::Loaded(_))
    }
}

/// Visibility and content of a card's details sub-panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPanel {
    /// Never opened, or collapsed while a fetch was in flight
    #[default]
    Hidden,
    /// Open and waiting for the fetch identified by the serial
    Loading(u64),
    /// Open and showing content
    Shown(DetailContent),
    /// Hidden, keeping the last content until the next open re-fetches
    Closed(DetailContent),
}

impl DetailPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailPanel::Loading(_) | DetailPanel::Shown(_))
    }

    /// Content currently on screen, if any.
    pub fn visible_content(&self) -> Option<&DetailContent> {
        match self {
            DetailPanel::Shown(content) => Some(content),
            _ => None,
        }
    }
}

/// Actions a result card exposes. Each one triggers exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Expand or collapse the details panel
    ToggleDetails,
    /// Add the card's title to the watchlist
    AddToWatchlist,
    /// Hide open details without discarding them
    CloseDetails,
}

/// One display unit in the results region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub record: SummaryRecord,
    pub details: DetailPanel,
}

impl ResultCard {
    pub fn new(record: SummaryRecord) -> Self {
        Self {
            record,
            details: DetailPanel::Hidden,
        }
    }

    /// Actions currently available on this card.
    pub fn actions(&self) -> Vec<CardAction> {
        let mut actions = vec![CardAction::ToggleDetails, CardAction::AddToWatchlist];
        if self
            .details
            .visible_content()
            .is_some_and(DetailContent::has_close_action)
        {
            actions.push(CardAction::CloseDetails);
        }
        actions
    }
}

/// Builds one card per record, in input order, all with details hidden.
pub fn render(records: Vec<SummaryRecord>) -> Vec<ResultCard> {
    records.into_iter().map(ResultCard::new).collect()
}
