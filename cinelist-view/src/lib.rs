//! Cinelist View - display units and interaction flow

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Renderers turn records into plain display units; the interaction
//! controller owns the watchlist and sequences searches and detail fetches.
//! Units can be projected to HTML for the browser widget or to text for
//! the terminal.

pub mod components;
pub mod controller;
pub mod render;
pub mod text;
pub mod theme;

// Re-export main types
pub use controller::{
    ActionError, DetailCompletion, InteractionController, PendingDetail, PendingSearch,
    SEARCHING_MESSAGE, SearchCompletion, SearchState,
};
pub use render::{CardAction, DetailContent, DetailPanel, ResultCard, WatchlistUnit};
pub use theme::Theme;
