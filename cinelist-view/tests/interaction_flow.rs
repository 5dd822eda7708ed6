//! End-to-end interaction scenarios driven through the controller with a
//! scripted metadata provider.

use std::sync::Arc;

use cinelist_core::{DetailRecord, DisplayConfig, MediaId, Poster, SummaryRecord};
use cinelist_search::providers::MockProvider;
use cinelist_search::{DetailClient, DetailError, SearchClient, SearchError};
use cinelist_view::{
    ActionError, CardAction, DetailContent, DetailPanel, InteractionController, SEARCHING_MESSAGE,
    SearchState, Theme, WatchlistUnit,
};

fn summary(id: &str, title: &str) -> SummaryRecord {
    SummaryRecord {
        id: MediaId::new(id),
        title: title.to_string(),
        year: "1999".to_string(),
        media_type: "movie".to_string(),
        poster: Poster::Missing,
    }
}

fn details(id: &str) -> DetailRecord {
    DetailRecord {
        id: MediaId::new(id),
        plot: "A hacker learns the truth.".to_string(),
        rating: "8.7".to_string(),
        actors: "Keanu Reeves".to_string(),
    }
}

fn matrix_results() -> Vec<SummaryRecord> {
    vec![
        summary("tt0133093", "The Matrix"),
        summary("tt0234215", "The Matrix Reloaded"),
        summary("tt0242653", "The Matrix Revolutions"),
    ]
}

fn controller_with(mock: &MockProvider) -> InteractionController {
    let provider = Arc::new(mock.clone());
    InteractionController::new(
        SearchClient::new(provider.clone()),
        DetailClient::new(provider),
        &DisplayConfig::default(),
    )
}

async fn controller_with_matrix_results(mock: &MockProvider) -> InteractionController {
    mock.on_search("Matrix", Ok(matrix_results()));
    let mut controller = controller_with(mock);
    controller.set_input("Matrix");
    assert!(controller.search().await);
    controller
}

#[tokio::test]
async fn test_blank_search_is_ignored() {
    let mock = MockProvider::new();
    let mut controller = controller_with(&mock);

    for input in ["", "   ", "\t"] {
        controller.set_input(input);
        assert!(!controller.search().await);
    }

    assert!(mock.search_calls().is_empty());
    assert_eq!(controller.state(), &SearchState::Idle);
    assert!(controller.status().is_none());
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_search_renders_cards_in_returned_order() {
    let mock = MockProvider::new();
    let controller = controller_with_matrix_results(&mock).await;

    assert_eq!(controller.state(), &SearchState::Results);
    assert!(controller.status().is_none());

    let titles: Vec<&str> = controller
        .results()
        .iter()
        .map(|card| card.record.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["The Matrix", "The Matrix Reloaded", "The Matrix Revolutions"]
    );
}

#[tokio::test]
async fn test_search_input_is_trimmed() {
    let mock = MockProvider::new();
    mock.on_search("Matrix", Ok(matrix_results()));
    let mut controller = controller_with(&mock);

    controller.set_input("  Matrix  ");
    controller.search().await;

    assert_eq!(mock.search_calls(), vec!["Matrix".to_string()]);
    assert_eq!(controller.char_count_label(), "Chars: 10");
}

#[tokio::test]
async fn test_not_found_shows_api_message_and_no_cards() {
    let mock = MockProvider::new();
    mock.on_search(
        "zzzzz",
        Err(SearchError::NotFound {
            message: "Movie not found!".to_string(),
        }),
    );
    let mut controller = controller_with(&mock);

    controller.set_input("zzzzz");
    controller.search().await;

    assert_eq!(
        controller.state(),
        &SearchState::Error {
            message: "Movie not found!".to_string()
        }
    );
    assert_eq!(controller.status(), Some("Movie not found!"));
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_network_failure_shows_generic_message() {
    let mock = MockProvider::new();
    mock.on_search(
        "Matrix",
        Err(SearchError::Network {
            reason: "connection reset".to_string(),
        }),
    );
    let mut controller = controller_with(&mock);

    controller.set_input("Matrix");
    controller.search().await;

    assert_eq!(controller.status(), Some("Network error or invalid API key."));
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_new_search_clears_previous_results_immediately() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;
    assert_eq!(controller.results().len(), 3);

    controller.set_input("Inception");
    let pending = controller.begin_search().expect("search should start");

    assert!(controller.results().is_empty());
    assert_eq!(controller.status(), Some(SEARCHING_MESSAGE));
    assert!(matches!(controller.state(), SearchState::Searching { .. }));
    assert_eq!(pending.query.as_str(), "Inception");
}

#[tokio::test]
async fn test_clear_returns_to_idle() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.clear();

    assert_eq!(controller.state(), &SearchState::Idle);
    assert!(controller.results().is_empty());
    assert!(controller.status().is_none());
}

#[tokio::test]
async fn test_clear_after_error_returns_to_idle() {
    let mock = MockProvider::new();
    let mut controller = controller_with(&mock);
    controller.set_input("nothing here");
    controller.search().await;
    assert!(matches!(controller.state(), SearchState::Error { .. }));

    controller.clear();

    assert_eq!(controller.state(), &SearchState::Idle);
    assert!(controller.status().is_none());
}

#[tokio::test]
async fn test_duplicate_add_keeps_one_entry_and_sets_notice() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.add_to_watchlist(0).unwrap();
    assert!(controller.notice().is_none());

    let err = controller.add_to_watchlist(0).unwrap_err();
    assert!(matches!(err, ActionError::AlreadyExists(_)));
    assert_eq!(controller.watchlist().len(), 1);
    assert_eq!(controller.notice(), Some("Movie already in watchlist."));

    controller.dismiss_notice();
    assert!(controller.notice().is_none());
}

#[tokio::test]
async fn test_add_rerenders_watchlist() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;
    assert_eq!(controller.watchlist_units(), &[WatchlistUnit::Placeholder]);

    controller.add_to_watchlist(1).unwrap();
    controller.add_to_watchlist(0).unwrap();

    let ids: Vec<String> = controller
        .watchlist_units()
        .iter()
        .filter_map(|unit| match unit {
            WatchlistUnit::Entry { id, .. } => Some(id.to_string()),
            WatchlistUnit::Placeholder => None,
        })
        .collect();
    assert_eq!(ids, vec!["tt0234215", "tt0133093"]);
}

#[tokio::test]
async fn test_remove_from_watchlist() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;
    controller.add_to_watchlist(0).unwrap();

    assert!(
        controller
            .remove_from_watchlist(&MediaId::new("tt9999999"))
            .is_none()
    );
    assert_eq!(controller.watchlist().len(), 1);

    assert!(
        controller
            .remove_from_watchlist(&MediaId::new("tt0133093"))
            .is_some()
    );
    assert_eq!(controller.watchlist_units(), &[WatchlistUnit::Placeholder]);
}

#[tokio::test]
async fn test_watchlist_survives_new_search_and_clear() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;
    controller.add_to_watchlist(2).unwrap();

    controller.clear();
    controller.set_input("zzzzz");
    controller.search().await;

    assert_eq!(controller.watchlist().len(), 1);
}

#[tokio::test]
async fn test_actions_on_missing_card_are_rejected() {
    let mock = MockProvider::new();
    let mut controller = controller_with(&mock);

    assert_eq!(
        controller.add_to_watchlist(0),
        Err(ActionError::NoSuchCard { position: 0 })
    );
    assert!(controller.toggle_details(4).is_err());
    assert!(controller.close_details(4).is_err());
}

#[tokio::test]
async fn test_expand_collapse_expand_fetches_twice() {
    let mock = MockProvider::new();
    mock.on_lookup("tt0133093", Ok(details("tt0133093")));
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.toggle_details_now(0).await.unwrap();
    assert_eq!(
        controller.results()[0].details,
        DetailPanel::Shown(DetailContent::Loaded(details("tt0133093")))
    );

    controller.toggle_details_now(0).await.unwrap();
    assert!(!controller.results()[0].details.is_open());
    assert_eq!(mock.lookup_calls().len(), 1);

    controller.toggle_details_now(0).await.unwrap();
    assert!(controller.results()[0].details.is_open());
    assert_eq!(
        mock.lookup_calls(),
        vec![MediaId::new("tt0133093"), MediaId::new("tt0133093")]
    );
}

#[tokio::test]
async fn test_close_keeps_content_and_is_idempotent() {
    let mock = MockProvider::new();
    mock.on_lookup("tt0133093", Ok(details("tt0133093")));
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.close_details(0).unwrap();
    assert_eq!(controller.results()[0].details, DetailPanel::Hidden);

    controller.toggle_details_now(0).await.unwrap();
    controller.close_details(0).unwrap();
    let closed = DetailPanel::Closed(DetailContent::Loaded(details("tt0133093")));
    assert_eq!(controller.results()[0].details, closed);

    controller.close_details(0).unwrap();
    assert_eq!(controller.results()[0].details, closed);
    assert_eq!(mock.lookup_calls().len(), 1);
}

#[tokio::test]
async fn test_add_does_not_toggle_details() {
    let mock = MockProvider::new();
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.add_to_watchlist(0).unwrap();

    assert_eq!(controller.results()[0].details, DetailPanel::Hidden);
    assert!(mock.lookup_calls().is_empty());
}

#[tokio::test]
async fn test_failed_details_leave_card_usable() {
    let mock = MockProvider::new();
    mock.on_lookup(
        "tt0133093",
        Err(DetailError::Network {
            reason: "timeout".to_string(),
        }),
    );
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.toggle_details_now(0).await.unwrap();
    assert_eq!(
        controller.results()[0].details,
        DetailPanel::Shown(DetailContent::Failed(DetailError::Network {
            reason: "timeout".to_string()
        }))
    );

    controller.add_to_watchlist(0).unwrap();
    assert_eq!(controller.watchlist().len(), 1);
}

#[tokio::test]
async fn test_close_leaves_failed_details_shown() {
    let mock = MockProvider::new();
    let failure = DetailError::Network {
        reason: "timeout".to_string(),
    };
    mock.on_lookup("tt0133093", Err(failure.clone()));
    let mut controller = controller_with_matrix_results(&mock).await;

    controller.toggle_details_now(0).await.unwrap();
    assert!(!controller.results()[0].actions().contains(&CardAction::CloseDetails));

    controller.close_details(0).unwrap();
    assert_eq!(
        controller.results()[0].details,
        DetailPanel::Shown(DetailContent::Failed(failure))
    );

    controller.toggle_details_now(0).await.unwrap();
    assert!(!controller.results()[0].details.is_open());
}

#[tokio::test]
async fn test_stale_search_response_is_dropped() {
    let mock = MockProvider::new();
    mock.on_search("Matrix", Ok(matrix_results()));
    mock.on_search("Inception", Ok(vec![summary("tt1375666", "Inception")]));
    let mut controller = controller_with(&mock);

    controller.set_input("Matrix");
    let slow = controller.begin_search().unwrap();
    let slow_request = controller.search_request(slow);

    controller.set_input("Inception");
    let fast = controller.begin_search().unwrap();
    let fast_request = controller.search_request(fast);

    assert!(controller.complete_search(fast_request.await));
    assert!(!controller.complete_search(slow_request.await));

    assert_eq!(controller.results().len(), 1);
    assert_eq!(controller.results()[0].record.title, "Inception");
}

#[tokio::test]
async fn test_search_response_after_clear_is_dropped() {
    let mock = MockProvider::new();
    mock.on_search("Matrix", Ok(matrix_results()));
    let mut controller = controller_with(&mock);

    controller.set_input("Matrix");
    let pending = controller.begin_search().unwrap();
    let request = controller.search_request(pending);
    controller.clear();

    assert!(!controller.complete_search(request.await));
    assert_eq!(controller.state(), &SearchState::Idle);
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_details_for_discarded_results_are_dropped() {
    let mock = MockProvider::new();
    mock.on_lookup("tt0133093", Ok(details("tt0133093")));
    mock.on_search("Inception", Ok(vec![summary("tt1375666", "Inception")]));
    let mut controller = controller_with_matrix_results(&mock).await;

    let pending = controller.toggle_details(0).unwrap().expect("fetch expected");
    let request = controller.detail_request(pending);

    controller.set_input("Inception");
    controller.search().await;

    assert!(!controller.complete_details(request.await));
    assert_eq!(controller.results()[0].details, DetailPanel::Hidden);
}

#[tokio::test]
async fn test_collapse_during_fetch_drops_late_details() {
    let mock = MockProvider::new();
    mock.on_lookup("tt0133093", Ok(details("tt0133093")));
    let mut controller = controller_with_matrix_results(&mock).await;

    let pending = controller.toggle_details(0).unwrap().expect("fetch expected");
    assert_eq!(pending.ticket.position(), 0);
    assert!(controller.results()[0].details.is_open());
    let request = controller.detail_request(pending);

    assert!(controller.toggle_details(0).unwrap().is_none());
    assert!(!controller.complete_details(request.await));
    assert_eq!(controller.results()[0].details, DetailPanel::Hidden);
}

#[test]
fn test_theme_toggle_and_initial_theme() {
    let mock = MockProvider::new();
    let mut controller = controller_with(&mock);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.toggle_theme(), Theme::Dark);

    let provider = Arc::new(mock);
    let dark = InteractionController::new(
        SearchClient::new(provider.clone()),
        DetailClient::new(provider),
        &DisplayConfig {
            start_dark: true,
            ..DisplayConfig::default()
        },
    );
    assert_eq!(dark.theme(), Theme::Dark);
}
