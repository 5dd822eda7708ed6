//! Result and watchlist cards.

use cinelist_core::Poster;

use super::layout::escape_html;
use crate::render::watchlist::{EMPTY_WATCHLIST_MESSAGE, WatchlistAction};
use crate::render::{CardAction, DetailContent, DetailPanel, ResultCard, WatchlistUnit};

/// Renders one result card. Buttons follow the actions the card offers.
pub fn result_card(card: &ResultCard, position: usize, placeholder: &str) -> String {
    let record = &card.record;
    let title = escape_html(&record.title);
    let actions = card.actions();
    let toggle_attr = if actions.contains(&CardAction::ToggleDetails) {
        r#" data-action="toggle-details""#
    } else {
        ""
    };
    let add_button = if actions.contains(&CardAction::AddToWatchlist) {
        r#"<button class="add-watchlist">Add to Watchlist</button>"#
    } else {
        ""
    };

    format!(
        r#"<div class="movie-card" data-id="{id}" data-position="{position}"{toggle_attr}>
            {poster}
            <div class="movie-info">
                <h3>{title}</h3>
                <p>{subtitle}</p>
            </div>
            {add_button}
            {details}
        </div>"#,
        id = escape_html(record.id.as_str()),
        poster = poster_img(&record.poster, &title, placeholder),
        subtitle = escape_html(&record.subtitle()),
        details = details_panel(card, &actions),
    )
}

/// Renders the whole results region.
pub fn results_container(cards: &[ResultCard], placeholder: &str) -> String {
    let cards_html: String = cards
        .iter()
        .enumerate()
        .map(|(position, card)| result_card(card, position, placeholder))
        .collect();

    format!(r#"<div id="moviesContainer">{cards_html}</div>"#)
}

/// Renders one watchlist unit.
pub fn watchlist_entry(unit: &WatchlistUnit, placeholder: &str) -> String {
    match (unit, unit.action()) {
        (WatchlistUnit::Entry { id, title, poster }, Some(WatchlistAction::Remove(_))) => {
            let title = escape_html(title);
            format!(
                r#"<div class="movie-card" data-id="{id}">
            {poster}
            <div class="movie-info">
                <h3>{title}</h3>
            </div>
            <button class="remove-watchlist">Remove</button>
        </div>"#,
                id = escape_html(id.as_str()),
                poster = poster_img(poster, &title, placeholder),
            )
        }
        _ => format!("<p>{EMPTY_WATCHLIST_MESSAGE}</p>"),
    }
}

/// Renders the whole watchlist region.
pub fn watchlist_container(units: &[WatchlistUnit], placeholder: &str) -> String {
    let units_html: String = units
        .iter()
        .map(|unit| watchlist_entry(unit, placeholder))
        .collect();

    format!(r#"<div id="watchlistContainer">{units_html}</div>"#)
}

/// `escaped_title` must already be escaped.
fn poster_img(poster: &Poster, escaped_title: &str, placeholder: &str) -> String {
    format!(
        r#"<img class="movie-poster" src="{}" alt="{escaped_title}">"#,
        escape_html(poster.display_url(placeholder))
    )
}

fn details_panel(card: &ResultCard, actions: &[CardAction]) -> String {
    let display = if card.details.is_open() { "block" } else { "none" };
    let close_button = if actions.contains(&CardAction::CloseDetails) {
        r#"<button class="remove-details">Close</button>"#
    } else {
        ""
    };

    let body = match &card.details {
        DetailPanel::Shown(content) | DetailPanel::Closed(content) => details_body(content),
        DetailPanel::Loading(_) => "<div>Loading...</div>".to_string(),
        DetailPanel::Hidden => String::new(),
    };

    format!(r#"<div class="movie-details" style="display: {display};">{body}{close_button}</div>"#)
}

fn details_body(content: &DetailContent) -> String {
    match content {
        DetailContent::Loaded(details) => format!(
            r#"
                <p><strong>Plot:</strong> {}</p>
                <p><strong>Rating:</strong> {}</p>
                <p><strong>Actors:</strong> {}</p>
            "#,
            escape_html(&details.plot),
            escape_html(&details.rating),
            escape_html(&details.actors),
        ),
        DetailContent::Failed(e) => format!("<div>{}</div>", e.user_message()),
    }
}
