//! HTML fragments for the browser widget.
//!
//! Fragments use the widget's existing markup classes so they drop straight
//! into its results and watchlist containers. All interpolated text is escaped.

pub mod cards;
pub mod layout;

pub use cards::{result_card, results_container, watchlist_container, watchlist_entry};
pub use layout::{escape_html, status_line, widget};
