// tests/review_state_tests.rs - Review list fetch lifecycle
//
// Drives `ReviewListState` the way the page's effect does: begin a fetch,
// await the source, complete, then report the outcome to the fakes.

mod common;

use common::{FakeViewport, Harness};
use futures::executor::block_on;
use storefront::fixtures;
use storefront::web_app::config::{LOGIN_PATH, REVIEW_ANCHOR_ID};
use storefront::web_app::error::{
    FetchError, OTHER_ERROR_DESCRIPTION, SERVER_FAULT_DESCRIPTION, SERVER_FAULT_TITLE,
    SESSION_EXPIRED_TITLE,
};
use storefront::web_app::model::ReviewPage;
use storefront::web_app::services::NotifyLevel;
use storefront::web_app::state::{open_review, report_outcome, FetchOutcome, ReviewListState};

/// One full effect run for `search`
fn run_fetch(harness: &Harness, state: &mut ReviewListState, search: &str) -> FetchOutcome {
    let services = harness.services();
    let ticket = state.begin(search);
    let result = block_on(services.reviews.my_reviews(&ticket.query));
    let outcome = state.complete(&ticket, result);
    report_outcome(&outcome, services.notifier.as_ref(), services.navigator.as_ref());
    outcome
}

fn loaded_state(harness: &Harness) -> ReviewListState {
    harness
        .source
        .respond("p=2", Ok(ReviewPage::from_json(fixtures::REVIEW_PAGE_JSON).unwrap()));

    let mut state = ReviewListState::new();
    assert_eq!(run_fetch(harness, &mut state, "?p=2"), FetchOutcome::Applied { count: 3 });
    state
}

#[test]
fn test_success_replaces_reviews_and_page_info() {
    let harness = Harness::new();
    let state = loaded_state(&harness);

    assert_eq!(harness.source.requested(), vec!["p=2"]);
    assert_eq!(state.reviews().len(), 3);
    assert_eq!(state.page_info().map(|p| p.current_page_number), Some(2));
    assert!(harness.notifier.shown().is_empty());
    assert!(harness.navigator.visited().is_empty());
}

#[test]
fn test_query_forwarded_verbatim() {
    let harness = Harness::new();
    harness.source.respond("p=1&sort=asc&q=%ED%82%A4", Ok(ReviewPage::default()));

    let mut state = ReviewListState::new();
    run_fetch(&harness, &mut state, "?p=1&sort=asc&q=%ED%82%A4");

    assert_eq!(harness.source.requested(), vec!["p=1&sort=asc&q=%ED%82%A4"]);
}

#[test]
fn test_empty_result_is_loaded_but_empty() {
    let harness = Harness::new();
    harness
        .source
        .respond("", Ok(ReviewPage::from_json(fixtures::EMPTY_PAGE_JSON).unwrap()));

    let mut state = ReviewListState::new();
    assert_eq!(run_fetch(&harness, &mut state, ""), FetchOutcome::Applied { count: 0 });
    assert!(state.is_loaded());
    assert!(state.reviews().is_empty());
}

#[test]
fn test_session_expired_warns_and_redirects() {
    let harness = Harness::new();
    harness
        .source
        .respond("p=1", Err(FetchError::from_response(401, "")));

    let mut state = ReviewListState::new();
    run_fetch(&harness, &mut state, "p=1");

    let shown = harness.notifier.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].level, NotifyLevel::Warning);
    assert_eq!(shown[0].title, SESSION_EXPIRED_TITLE);
    assert_eq!(harness.navigator.visited(), vec![LOGIN_PATH]);
}

#[test]
fn test_server_error_leaves_state_unchanged() {
    let harness = Harness::new();
    let mut state = loaded_state(&harness);
    let before = state.clone();

    harness
        .source
        .respond("p=3", Err(FetchError::from_response(500, "NullPointerException")));
    let outcome = run_fetch(&harness, &mut state, "p=3");

    assert!(matches!(outcome, FetchOutcome::Failed(_)));
    assert_eq!(state.reviews(), before.reviews());
    assert_eq!(state.page_info(), before.page_info());

    let shown = harness.notifier.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].level, NotifyLevel::Error);
    assert_eq!(shown[0].title, SERVER_FAULT_TITLE);
    assert_eq!(shown[0].description, SERVER_FAULT_DESCRIPTION);
    assert!(harness.navigator.visited().is_empty());
}

#[test]
fn test_other_error_titles_with_server_message() {
    let harness = Harness::new();
    harness
        .source
        .respond("p=99", Err(FetchError::from_response(400, "존재하지 않는 페이지입니다")));

    let mut state = ReviewListState::new();
    run_fetch(&harness, &mut state, "p=99");

    let shown = harness.notifier.shown();
    assert_eq!(shown[0].title, "존재하지 않는 페이지입니다");
    assert_eq!(shown[0].description, OTHER_ERROR_DESCRIPTION);
    assert!(!state.is_loaded());
    assert!(harness.navigator.visited().is_empty());
}

#[test]
fn test_network_failure_is_reported_not_raised() {
    let harness = Harness::new();
    // nothing scripted: the fake answers with a network error

    let mut state = ReviewListState::new();
    let outcome = run_fetch(&harness, &mut state, "p=1");

    assert!(matches!(outcome, FetchOutcome::Failed(FetchError::Network(_))));
    assert_eq!(harness.notifier.shown().len(), 1);
    assert_eq!(harness.notifier.shown()[0].level, NotifyLevel::Error);
}

#[test]
fn test_superseded_response_is_dropped_silently() {
    let harness = Harness::new();
    let services = harness.services();
    harness
        .source
        .respond("p=1", Ok(fixtures::review_page(vec![fixtures::review("1", "old", 3.0, "2023-01-01")], None)));
    harness
        .source
        .respond("p=2", Ok(fixtures::review_page(vec![fixtures::review("2", "new", 4.0, "2023-01-02")], None)));

    let mut state = ReviewListState::new();
    let slow = state.begin("p=1");
    let fast = state.begin("p=2");

    let fast_result = block_on(services.reviews.my_reviews(&fast.query));
    assert_eq!(state.complete(&fast, fast_result), FetchOutcome::Applied { count: 1 });

    // the first request answers last
    let slow_result = block_on(services.reviews.my_reviews(&slow.query));
    let outcome = state.complete(&slow, slow_result);
    report_outcome(&outcome, services.notifier.as_ref(), services.navigator.as_ref());

    assert_eq!(outcome, FetchOutcome::Discarded);
    assert_eq!(state.reviews()[0].product_name, "new");
    assert!(harness.notifier.shown().is_empty());
}

#[test]
fn test_superseded_failure_shows_no_toast() {
    let harness = Harness::new();
    let services = harness.services();
    harness.source.respond("p=1", Err(FetchError::from_response(401, "")));

    let mut state = ReviewListState::new();
    let stale = state.begin("p=1");
    let _current = state.begin("p=2");

    let result = block_on(services.reviews.my_reviews(&stale.query));
    let outcome = state.complete(&stale, result);
    report_outcome(&outcome, services.notifier.as_ref(), services.navigator.as_ref());

    assert_eq!(outcome, FetchOutcome::Discarded);
    assert!(harness.notifier.shown().is_empty());
    assert!(harness.navigator.visited().is_empty());
}

#[test]
fn test_same_query_refetch_only_latest_applies() {
    let mut state = ReviewListState::new();
    let first = state.begin("p=1");
    let second = state.begin("p=1");

    assert_eq!(
        state.complete(&first, Ok(ReviewPage::default())),
        FetchOutcome::Discarded
    );
    assert_eq!(
        state.complete(&second, Ok(ReviewPage::default())),
        FetchOutcome::Applied { count: 0 }
    );
}

#[test]
fn test_row_activation_navigates_and_scrolls() {
    let harness = Harness::with_viewport(FakeViewport::with_anchor(REVIEW_ANCHOR_ID));
    let services = harness.services();

    open_review("31", "p=2", services.navigator.as_ref(), services.viewport.as_ref());

    assert_eq!(harness.navigator.visited(), vec!["/review/review/31?p=2"]);
    assert_eq!(harness.viewport.scrolled(), vec![REVIEW_ANCHOR_ID]);
}

#[test]
fn test_row_activation_without_anchor_still_navigates() {
    let harness = Harness::new();
    let services = harness.services();

    open_review("7", "", services.navigator.as_ref(), services.viewport.as_ref());

    assert_eq!(harness.navigator.visited(), vec!["/review/review/7"]);
    assert!(harness.viewport.scrolled().is_empty());
}
