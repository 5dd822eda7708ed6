//! Plain-text projection of display units for terminal output.

use std::fmt::Write;

use crate::render::{DetailContent, DetailPanel, ResultCard, WatchlistUnit};
use crate::render::watchlist::EMPTY_WATCHLIST_MESSAGE;

/// One result card as numbered lines; positions shown are 1-based.
pub fn result_card(card: &ResultCard, position: usize, placeholder: &str) -> String {
    let record = &card.record;
    let mut out = format!(
        "[{}] {} ({})\n    id: {}  poster: {}\n",
        position + 1,
        record.title,
        record.subtitle(),
        record.id,
        record.poster.display_url(placeholder),
    );

    match &card.details {
        DetailPanel::Loading(_) => out.push_str("    Loading details...\n"),
        DetailPanel::Shown(DetailContent::Loaded(details)) => {
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                "    Plot: {}\n    Rating: {}\n    Actors: {}\n",
                details.plot, details.rating, details.actors
            );
        }
        DetailPanel::Shown(DetailContent::Failed(e)) => {
            let _ = writeln!(out, "    {}", e.user_message());
        }
        DetailPanel::Hidden | DetailPanel::Closed(_) => {}
    }

    out
}

/// All result cards, in order.
pub fn results(cards: &[ResultCard], placeholder: &str) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(position, card)| result_card(card, position, placeholder))
        .collect()
}

/// Watchlist units, numbered from 1.
pub fn watchlist(units: &[WatchlistUnit]) -> String {
    let mut out = String::new();
    for (position, unit) in units.iter().enumerate() {
        match unit {
            WatchlistUnit::Placeholder => {
                let _ = writeln!(out, "{EMPTY_WATCHLIST_MESSAGE}");
            }
            WatchlistUnit::Entry { id, title, .. } => {
                let _ = writeln!(out, "({}) {title} [{id}]", position + 1);
            }
        }
    }
    out
}
