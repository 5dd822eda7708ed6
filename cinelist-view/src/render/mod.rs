//! Renderers: project plain records into display units.
//!
//! Each call produces a complete replacement set; nothing is diffed against
//! what was rendered before.

pub mod results;
pub mod watchlist;

pub use results::{CardAction, DetailContent, DetailPanel, ResultCard};
pub use watchlist::{EMPTY_WATCHLIST_MESSAGE, WatchlistAction, WatchlistUnit};
