//! Widget layout - search bar, status line, containers

use cinelist_core::DisplayConfig;

use super::cards::{results_container, watchlist_container};
use crate::controller::InteractionController;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the status region: loading indicator, error message, or nothing.
pub fn status_line(controller: &InteractionController) -> String {
    let inner = match (controller.state(), controller.status()) {
        (crate::SearchState::Searching { .. }, Some(text)) => {
            format!(r#"<div id="loading">{}</div>"#, escape_html(text))
        }
        (_, Some(text)) => format!(r#"<div id="errorMsg">{}</div>"#, escape_html(text)),
        (_, None) => String::new(),
    };

    format!(r#"<div id="searchStatus">{inner}</div>"#)
}

/// Renders the complete widget for the controller's current state.
pub fn widget(controller: &InteractionController, display: &DisplayConfig) -> String {
    let placeholder = display.poster_placeholder_url.as_str();
    let theme = controller.theme();
    let body_class = theme
        .body_class()
        .map(|class| format!(r#" class="{class}""#))
        .unwrap_or_default();

    let notice_html = controller
        .notice()
        .map(|notice| format!(r#"<div id="notice" role="alert">{}</div>"#, escape_html(notice)))
        .unwrap_or_default();

    format!(
        r#"<div id="cinelist"{body_class}>
            <div class="search-bar">
                <input id="searchInput" type="text" value="{input}" placeholder="Search movies...">
                <span id="charCount">{char_count}</span>
                <button id="searchBtn">Search</button>
                <button id="clearBtn">Clear</button>
                <button id="themeToggle">{theme_label}</button>
            </div>
            {notice_html}
            {status}
            {results}
            <h2>Watchlist</h2>
            {watchlist}
        </div>"#,
        input = escape_html(controller.input()),
        char_count = controller.char_count_label(),
        theme_label = theme.toggle_label(),
        status = status_line(controller),
        results = results_container(controller.results(), placeholder),
        watchlist = watchlist_container(controller.watchlist_units(), placeholder),
    )
}
