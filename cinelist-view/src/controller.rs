//! Interaction controller: the search / results / watchlist state machine.
//!
//! States move `Idle -> Searching -> {Results, Error}`; a new search re-enters
//! `Searching` from any state and `clear` returns to `Idle`.
//!
//! Network work is split in two phases so the caller's event loop stays
//! responsive: `begin_*` updates state synchronously and hands back a pending
//! request, the request future runs without borrowing the controller, and
//! `complete_*` applies the outcome. Every request carries a ticket; outcomes
//! whose ticket is no longer current are dropped instead of overwriting newer
//! state. Nothing is cancelled.

use cinelist_core::{
    AlreadyExists, DetailRecord, DisplayConfig, MediaId, SummaryRecord, WatchlistStore,
};
use cinelist_search::{DetailClient, DetailError, SearchClient, SearchError, SearchQuery};
use futures::future::BoxFuture;
use thiserror::Error;
use tracing::{debug, info};

use crate::render::{self, CardAction, DetailContent, DetailPanel, ResultCard, WatchlistUnit};
use crate::theme::Theme;

/// Status text shown while a search is in flight.
pub const SEARCHING_MESSAGE: &str = "Searching...";

/// Where the search flow currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching {
        query: SearchQuery,
        ticket: SearchTicket,
    },
    Results,
    Error {
        message: String,
    },
}

/// Identifies one issued search; only the latest one may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

/// Identifies one details fetch for one card of one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailTicket {
    generation: u64,
    position: usize,
    serial: u64,
}

impl DetailTicket {
    /// Position of the card the fetch belongs to.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// A search that has been started and still needs its request run.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub query: SearchQuery,
}

/// A details fetch that has been started and still needs its request run.
#[derive(Debug, Clone)]
pub struct PendingDetail {
    pub ticket: DetailTicket,
    pub id: MediaId,
}

/// Finished search request, ready to hand back to the controller.
#[derive(Debug)]
pub struct SearchCompletion {
    pub ticket: SearchTicket,
    pub outcome: Result<Vec<SummaryRecord>, SearchError>,
}

/// Finished details request, ready to hand back to the controller.
#[derive(Debug)]
pub struct DetailCompletion {
    pub ticket: DetailTicket,
    pub outcome: Result<DetailRecord, DetailError>,
}

/// Errors from card and watchlist actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("No result card at position {position}")]
    NoSuchCard { position: usize },

    #[error(transparent)]
    AlreadyExists(#[from] AlreadyExists),
}

/// Owns the watchlist and all rendered state for one session.
#[derive(Debug)]
pub struct InteractionController {
    search_client: SearchClient,
    detail_client: DetailClient,
    watchlist: WatchlistStore,
    input: String,
    state: SearchState,
    status: Option<String>,
    results: Vec<ResultCard>,
    watchlist_units: Vec<WatchlistUnit>,
    notice: Option<String>,
    theme: Theme,
    issued_searches: u64,
    issued_details: u64,
    /// Bumped whenever the result set is discarded
    generation: u64,
}

impl InteractionController {
    pub fn new(
        search_client: SearchClient,
        detail_client: DetailClient,
        display: &DisplayConfig,
    ) -> Self {
        let watchlist = WatchlistStore::new();
        let watchlist_units = render::watchlist::render(watchlist.list());

        Self {
            search_client,
            detail_client,
            watchlist,
            input: String::new(),
            state: SearchState::Idle,
            status: None,
            results: Vec::new(),
            watchlist_units,
            notice: None,
            theme: if display.start_dark {
                Theme::Dark
            } else {
                Theme::Light
            },
            issued_searches: 0,
            issued_details: 0,
            generation: 0,
        }
    }

    /// Replaces the query input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Character counter for the raw, untrimmed input.
    pub fn char_count_label(&self) -> String {
        format!("Chars: {}", self.input.chars().count())
    }

    /// Starts a search for the current input.
    ///
    /// Blank input is ignored entirely and returns `None`. Otherwise the
    /// previous results are cleared, the loading status is shown, and the
    /// returned request must be run and passed to [`Self::complete_search`].
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let Some(query) = SearchQuery::parse(&self.input) else {
            debug!("Ignoring search with blank input");
            return None;
        };

        self.issued_searches += 1;
        let ticket = SearchTicket(self.issued_searches);

        self.discard_results();
        self.status = Some(SEARCHING_MESSAGE.to_string());
        self.state = SearchState::Searching {
            query: query.clone(),
            ticket,
        };
        info!(%query, ticket = ticket.0, "Search started");

        Some(PendingSearch { ticket, query })
    }

    /// Request future for a started search. It does not borrow the controller.
    pub fn search_request(&self, pending: PendingSearch) -> BoxFuture<'static, SearchCompletion> {
        let client = self.search_client.clone();
        Box::pin(async move {
            let outcome = client.search(&pending.query).await;
            SearchCompletion {
                ticket: pending.ticket,
                outcome,
            }
        })
    }

    /// Applies a search outcome. Returns `false` if it was stale and dropped.
    pub fn complete_search(&mut self, completion: SearchCompletion) -> bool {
        let is_current = matches!(
            &self.state,
            SearchState::Searching { ticket, .. } if *ticket == completion.ticket
        );
        if !is_current {
            debug!(ticket = completion.ticket.0, "Dropping stale search response");
            return false;
        }

        match completion.outcome {
            Ok(records) => {
                self.results = render::results::render(records);
                self.status = None;
                self.state = SearchState::Results;
            }
            Err(e) => {
                let message = e.user_message();
                self.results.clear();
                self.status = Some(message.clone());
                self.state = SearchState::Error { message };
            }
        }
        true
    }

    /// Runs a whole search for the current input. Returns whether one ran.
    pub async fn search(&mut self) -> bool {
        let Some(pending) = self.begin_search() else {
            return false;
        };
        let completion = self.search_request(pending).await;
        self.complete_search(completion)
    }

    /// Clears results and status text and returns to `Idle`.
    pub fn clear(&mut self) {
        self.discard_results();
        self.status = None;
        self.state = SearchState::Idle;
        debug!("Results cleared");
    }

    /// Expands or collapses a card's details.
    ///
    /// Collapsing never fetches. Opening returns the fetch to run and pass to
    /// [`Self::complete_details`].
    ///
    /// # Errors
    ///
    /// - `ActionError::NoSuchCard` - No card at `position`
    pub fn toggle_details(
        &mut self,
        position: usize,
    ) -> Result<Option<PendingDetail>, ActionError> {
        let generation = self.generation;
        let card = self
            .results
            .get_mut(position)
            .ok_or(ActionError::NoSuchCard { position })?;

        match std::mem::take(&mut card.details) {
            DetailPanel::Shown(content) => {
                card.details = DetailPanel::Closed(content);
                Ok(None)
            }
            // Collapsing mid-fetch leaves the panel hidden; the late response is ignored.
            DetailPanel::Loading(_) => Ok(None),
            DetailPanel::Hidden | DetailPanel::Closed(_) => {
                self.issued_details += 1;
                let serial = self.issued_details;
                card.details = DetailPanel::Loading(serial);
                debug!(id = %card.record.id, serial, "Details requested");

                Ok(Some(PendingDetail {
                    ticket: DetailTicket {
                        generation,
                        position,
                        serial,
                    },
                    id: card.record.id.clone(),
                }))
            }
        }
    }

    /// Request future for a started details fetch.
    pub fn detail_request(&self, pending: PendingDetail) -> BoxFuture<'static, DetailCompletion> {
        let client = self.detail_client.clone();
        Box::pin(async move {
            let outcome = client.fetch_details(&pending.id).await;
            DetailCompletion {
                ticket: pending.ticket,
                outcome,
            }
        })
    }

    /// Applies a details outcome. Returns `false` if it was stale and dropped.
    pub fn complete_details(&mut self, completion: DetailCompletion) -> bool {
        let ticket = completion.ticket;
        if ticket.generation != self.generation {
            debug!(serial = ticket.serial, "Dropping details for a discarded result set");
            return false;
        }

        let Some(card) = self.results.get_mut(ticket.position) else {
            return false;
        };
        if card.details != DetailPanel::Loading(ticket.serial) {
            debug!(serial = ticket.serial, "Dropping details for a collapsed panel");
            return false;
        }

        card.details = DetailPanel::Shown(match completion.outcome {
            Ok(details) => DetailContent::Loaded(details),
            Err(e) => DetailContent::Failed(e),
        });
        true
    }

    /// Toggles a card's details, running the fetch inline when opening.
    ///
    /// # Errors
    ///
    /// - `ActionError::NoSuchCard` - No card at `position`
    pub async fn toggle_details_now(&mut self, position: usize) -> Result<(), ActionError> {
        if let Some(pending) = self.toggle_details(position)? {
            let completion = self.detail_request(pending).await;
            self.complete_details(completion);
        }
        Ok(())
    }

    /// Hides loaded details, keeping their content.
    ///
    /// Does nothing unless the card offers [`CardAction::CloseDetails`], so
    /// hidden, loading, and failed panels are left alone.
    ///
    /// # Errors
    ///
    /// - `ActionError::NoSuchCard` - No card at `position`
    pub fn close_details(&mut self, position: usize) -> Result<(), ActionError> {
        let card = self
            .results
            .get_mut(position)
            .ok_or(ActionError::NoSuchCard { position })?;

        if !card.actions().contains(&CardAction::CloseDetails) {
            debug!(id = %card.record.id, "No close action on details panel");
            return Ok(());
        }
        if let DetailPanel::Shown(content) = &card.details {
            card.details = DetailPanel::Closed(content.clone());
        }
        Ok(())
    }

    /// Adds a result card's title to the watchlist.
    ///
    /// A duplicate leaves the watchlist untouched and sets the notice text.
    ///
    /// # Errors
    ///
    /// - `ActionError::NoSuchCard` - No card at `position`
    /// - `ActionError::AlreadyExists` - The title is already listed
    pub fn add_to_watchlist(&mut self, position: usize) -> Result<(), ActionError> {
        let record = self
            .results
            .get(position)
            .ok_or(ActionError::NoSuchCard { position })?
            .record
            .clone();

        match self.watchlist.add(record) {
            Ok(()) => {
                self.notice = None;
                self.refresh_watchlist();
                Ok(())
            }
            Err(e) => {
                self.notice = Some(e.user_message().to_string());
                Err(e.into())
            }
        }
    }

    /// Removes a title from the watchlist; unknown ids are a no-op.
    pub fn remove_from_watchlist(&mut self, id: &MediaId) -> Option<SummaryRecord> {
        let removed = self.watchlist.remove(id);
        self.refresh_watchlist();
        removed
    }

    /// Switches between light and dark theme, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Status text: loading indicator or error message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn results(&self) -> &[ResultCard] {
        &self.results
    }

    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    pub fn watchlist_units(&self) -> &[WatchlistUnit] {
        &self.watchlist_units
    }

    /// Pending user notice, such as a duplicate add.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn discard_results(&mut self) {
        self.results.clear();
        self.generation += 1;
    }

    fn refresh_watchlist(&mut self) {
        self.watchlist_units = render::watchlist::render(self.watchlist.list());
    }
}
