//! Tests for the `App` controller: navigation triggers, request tokens, and
//! bookmark actions, driven with a fake fetcher.

mod common;

use common::{load, memory_app, page_body, FakeFetcher};
use pageview::app::App;
use pageview::database::MemoryStore;
use pageview::managers::bookmark_manager::{BookmarkManagerTrait, BOOKMARKS_KEY};
use pageview::managers::history_manager::HistoryManagerTrait;
use pageview::types::bookmark::BookmarkAction;
use pageview::types::errors::{BookmarkError, FetchError, NavigationError};
use pageview::types::history::NavState;
use pageview::types::page::{ContentView, NavigationOutcome};

fn page(url: &str) -> ContentView {
    ContentView::Page {
        url: url.to_string(),
        body: page_body(url),
    }
}

/// load u1 → load u2 → back → forward, checking content, cursor, and controls.
#[tokio::test]
async fn test_load_back_forward_scenario() {
    let mut app = memory_app();
    let fetcher = FakeFetcher::new();

    load(&mut app, &fetcher, "u1").await;
    assert_eq!(app.history().entries(), ["u1"]);
    assert_eq!(app.history().cursor(), Some(0));
    assert_eq!(app.nav_state(), NavState::default());
    assert_eq!(app.content(), &page("u1"));

    load(&mut app, &fetcher, "u2").await;
    assert_eq!(app.history().entries(), ["u1", "u2"]);
    assert_eq!(app.history().cursor(), Some(1));
    assert!(app.nav_state().can_go_back);

    let ticket = app.go_back().expect("back should be enabled");
    assert!(!ticket.record_history);
    assert_eq!(app.url_field(), "u1");
    assert_eq!(app.navigate(&fetcher, ticket).await, NavigationOutcome::Loaded);
    assert_eq!(app.content(), &page("u1"));
    assert_eq!(app.history().cursor(), Some(0));

    let ticket = app.go_forward().expect("forward should be enabled");
    app.navigate(&fetcher, ticket).await;
    assert_eq!(app.content(), &page("u2"));
    assert_eq!(app.history().cursor(), Some(1));
    assert_eq!(app.history().len(), 2);
}

/// Replaying an entry with back/forward never adds to the history.
#[tokio::test]
async fn test_replay_does_not_record() {
    let mut app = memory_app();
    let fetcher = FakeFetcher::new();
    load(&mut app, &fetcher, "a").await;
    load(&mut app, &fetcher, "b").await;

    let ticket = app.go_back().unwrap();
    app.navigate(&fetcher, ticket).await;
    assert_eq!(app.history().entries(), ["a", "b"]);
}

/// A new visit mid-history discards the forward branch.
#[tokio::test]
async fn test_branch_truncation_through_app() {
    let mut app = memory_app();
    let fetcher = FakeFetcher::new();
    load(&mut app, &fetcher, "A").await;
    load(&mut app, &fetcher, "B").await;
    let ticket = app.go_back().unwrap();
    app.navigate(&fetcher, ticket).await;
    load(&mut app, &fetcher, "C").await;

    assert_eq!(app.history().entries(), ["A", "C"]);
    assert!(!app.nav_state().can_go_forward);
}

#[test]
fn test_submit_empty_field_is_rejected() {
    let mut app = memory_app();
    app.set_url_field("   ");
    assert_eq!(app.submit_url(), Err(NavigationError::EmptyUrl));
    assert!(app.history().is_empty());
}

#[test]
fn test_submit_trims_the_field() {
    let mut app = memory_app();
    app.set_url_field("  https://example.com \t");
    let ticket = app.submit_url().unwrap();
    assert_eq!(ticket.url, "https://example.com");
    assert!(ticket.record_history);
}

#[test]
fn test_back_and_forward_on_empty_history_are_noops() {
    let mut app = memory_app();
    assert_eq!(app.go_back(), None);
    assert_eq!(app.go_forward(), None);
}

/// A failed fetch shows the error detail, records nothing, and later
/// navigations still work.
#[tokio::test]
async fn test_failed_fetch_shows_error_and_recovers() {
    let mut app = memory_app();
    let fetcher = FakeFetcher::new().failing("https://down.example", FetchError::Http(503));

    load(&mut app, &fetcher, "https://ok.example").await;
    load(&mut app, &fetcher, "https://down.example").await;

    match app.content() {
        ContentView::Failed { url, message } => {
            assert_eq!(url, "https://down.example");
            assert!(message.contains("503"), "message was {:?}", message);
        }
        other => panic!("expected a failure view, got {:?}", other),
    }
    assert_eq!(app.history().entries(), ["https://ok.example"]);

    load(&mut app, &fetcher, "https://next.example").await;
    assert_eq!(app.content(), &page("https://next.example"));
    assert_eq!(app.history().entries(), ["https://ok.example", "https://next.example"]);
}

#[tokio::test]
async fn test_network_error_detail_is_shown() {
    let mut app = memory_app();
    let fetcher = FakeFetcher::new().failing(
        "http://nowhere.invalid",
        FetchError::Network("dns error".into()),
    );
    app.set_url_field("http://nowhere.invalid");
    let ticket = app.submit_url().unwrap();
    let outcome = app.navigate(&fetcher, ticket).await;

    assert_eq!(
        outcome,
        NavigationOutcome::Failed("Failed to load page. Network error: dns error".into())
    );
}

/// Only the most recently issued ticket is applied.
#[test]
fn test_stale_response_is_discarded() {
    let mut app = memory_app();

    app.set_url_field("slow");
    let slow = app.submit_url().unwrap();
    app.set_url_field("fast");
    let fast = app.submit_url().unwrap();
    assert!(fast.token > slow.token);

    assert_eq!(
        app.complete_navigation(&fast, Ok(page_body("fast"))),
        NavigationOutcome::Loaded
    );
    assert_eq!(
        app.complete_navigation(&slow, Ok(page_body("slow"))),
        NavigationOutcome::Stale
    );

    assert_eq!(app.content(), &page("fast"));
    assert_eq!(app.history().entries(), ["fast"]);
}

/// A stale failure does not overwrite newer content either.
#[test]
fn test_stale_failure_is_discarded() {
    let mut app = memory_app();
    app.set_url_field("first");
    let first = app.submit_url().unwrap();
    app.set_url_field("second");
    let second = app.submit_url().unwrap();

    app.complete_navigation(&second, Ok(page_body("second")));
    let outcome = app.complete_navigation(&first, Err(FetchError::Http(500)));

    assert_eq!(outcome, NavigationOutcome::Stale);
    assert_eq!(app.content(), &page("second"));
}

/// A back press supersedes a load that is still in flight.
#[test]
fn test_back_supersedes_pending_load() {
    let mut app = memory_app();
    for url in ["a", "b"] {
        app.set_url_field(url);
        let t = app.submit_url().unwrap();
        app.complete_navigation(&t, Ok(page_body(url)));
    }

    app.set_url_field("c");
    let pending = app.submit_url().unwrap();
    let back = app.go_back().unwrap();
    app.complete_navigation(&back, Ok(page_body("a")));

    assert_eq!(
        app.complete_navigation(&pending, Ok(page_body("c"))),
        NavigationOutcome::Stale
    );
    assert_eq!(app.history().entries(), ["a", "b"]);
    assert_eq!(app.history().cursor(), Some(0));
}

// ─── Bookmarks ───

#[test]
fn test_add_bookmark_uses_url_field() {
    let mut app = memory_app();
    app.set_url_field(" https://example.com ");
    app.add_bookmark().unwrap();

    let items = app.bookmark_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].url, "https://example.com");
}

#[test]
fn test_add_bookmark_errors() {
    let mut app = memory_app();
    assert_eq!(app.add_bookmark(), Err(BookmarkError::EmptyUrl));

    app.set_url_field("https://example.com");
    app.add_bookmark().unwrap();
    assert_eq!(
        app.add_bookmark(),
        Err(BookmarkError::DuplicateUrl("https://example.com".into()))
    );
    assert_eq!(app.bookmark_items().len(), 1);
}

/// Activating a bookmark fills the URL field and records the visit.
#[tokio::test]
async fn test_activate_bookmark_navigates_and_records() {
    let mut app = memory_app();
    let fetcher = FakeFetcher::new();
    app.set_url_field("https://example.com");
    app.add_bookmark().unwrap();
    app.set_url_field("");

    let item = app.bookmark_items().remove(0);
    let ticket = app
        .handle_bookmark_action(item.activate())
        .unwrap()
        .expect("activate should start a navigation");
    assert_eq!(app.url_field(), "https://example.com");
    assert!(ticket.record_history);

    app.navigate(&fetcher, ticket).await;
    assert_eq!(app.history().entries(), ["https://example.com"]);
    assert_eq!(app.content(), &page("https://example.com"));
}

/// Deleting an item never navigates to it.
#[test]
fn test_delete_action_does_not_activate() {
    let mut app = memory_app();
    app.set_url_field("https://example.com");
    app.add_bookmark().unwrap();
    app.set_url_field("typed");

    let item = app.bookmark_items().remove(0);
    let ticket = app.handle_bookmark_action(item.delete()).unwrap();

    assert_eq!(ticket, None);
    assert_eq!(app.url_field(), "typed");
    assert!(app.bookmark_items().is_empty());
    assert_eq!(app.content(), &ContentView::Empty);
    assert_eq!(
        app.bookmarks().persisted_blob().unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_bookmark_action_with_stale_index() {
    let mut app = memory_app();
    assert_eq!(
        app.handle_bookmark_action(BookmarkAction::Delete(0)),
        Err(BookmarkError::InvalidIndex(0))
    );
    assert_eq!(
        app.handle_bookmark_action(BookmarkAction::Activate(2)),
        Err(BookmarkError::InvalidIndex(2))
    );
}

/// Bookmarks are rehydrated from the store when the App is built.
#[test]
fn test_app_loads_persisted_bookmarks() {
    let store = MemoryStore::with_entry(BOOKMARKS_KEY, r#"[{"url":"https://saved.example"}]"#);
    let app = App::with_store(Box::new(store)).unwrap();
    assert_eq!(app.bookmarks().len(), 1);
    assert!(app.bookmarks().contains("https://saved.example"));
}
