//! App Core for pageview.
//!
//! `App` owns the viewer state: the URL field, session history, bookmarks
//! and the content region. It exposes one method per UI
//! trigger. Front ends call a trigger, run any fetch it asks for, and feed
//! the result back through [`App::complete_navigation`].
//!
//! Each navigation gets a request token. Only the result carrying the most
//! recently issued token is applied; anything older is dropped.

use std::path::PathBuf;

use crate::database::{Database, KeyValueStore};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::platform;
use crate::services::content_fetcher::PageFetcher;
use crate::types::bookmark::{Bookmark, BookmarkAction};
use crate::types::errors::{AppError, BookmarkError, FetchError, NavigationError};
use crate::types::history::NavState;
use crate::types::page::{ContentView, NavigationOutcome, NavigationTicket};
use crate::types::settings::BrowserSettings;
use crate::ui::view::{self, BookmarkItem};

/// Central application struct holding all viewer state.
pub struct App {
    url_field: String,
    history: HistoryManager,
    bookmarks: BookmarkManager,
    content: ContentView,
    latest_token: u64,
}

impl App {
    /// Creates an App over an already-loaded bookmark manager.
    pub fn new(bookmarks: BookmarkManager) -> Self {
        Self {
            url_field: String::new(),
            history: HistoryManager::new(),
            bookmarks,
            content: ContentView::Empty,
            latest_token: 0,
        }
    }

    /// Creates an App whose bookmarks live in `store`, loading them first.
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Result<Self, AppError> {
        let bookmarks = BookmarkManager::open(store)?;
        Ok(Self::new(bookmarks))
    }

    /// Opens the bookmark database named by `settings` and builds the App.
    pub fn open(settings: &BrowserSettings) -> Result<Self, AppError> {
        let path = Self::database_path(settings);
        log::info!("Opening bookmark database at {}", path.display());
        let db = Database::open(&path)?;
        Self::with_store(Box::new(db))
    }

    /// `storage.database_file` if set, otherwise `pageview.db` in the data directory.
    pub fn database_path(settings: &BrowserSettings) -> PathBuf {
        match &settings.storage.database_file {
            Some(file) => PathBuf::from(file),
            None => platform::get_data_dir().join("pageview.db"),
        }
    }

    // ─── URL field ───

    pub fn url_field(&self) -> &str {
        &self.url_field
    }

    pub fn set_url_field(&mut self, url: &str) {
        self.url_field = url.to_string();
    }

    // ─── Navigation triggers ───

    /// Load button / Enter: navigates to the trimmed URL field and records it.
    pub fn submit_url(&mut self) -> Result<NavigationTicket, NavigationError> {
        let url = self.url_field.trim().to_string();
        if url.is_empty() {
            return Err(NavigationError::EmptyUrl);
        }
        Ok(self.issue_ticket(url, true))
    }

    /// Back button. `None` when there is nothing behind the cursor.
    pub fn go_back(&mut self) -> Option<NavigationTicket> {
        let url = self.history.go_back()?.to_string();
        self.url_field = url.clone();
        Some(self.issue_ticket(url, false))
    }

    /// Forward button. `None` when the cursor is at the last entry.
    pub fn go_forward(&mut self) -> Option<NavigationTicket> {
        let url = self.history.go_forward()?.to_string();
        self.url_field = url.clone();
        Some(self.issue_ticket(url, false))
    }

    fn issue_ticket(&mut self, url: String, record_history: bool) -> NavigationTicket {
        self.latest_token += 1;
        log::info!("Navigating to {} (token {})", url, self.latest_token);
        NavigationTicket {
            token: self.latest_token,
            url,
            record_history,
        }
    }

    /// Applies a finished fetch.
    ///
    /// Results for superseded tickets are discarded. On success the content
    /// shows the raw body and, for recorded navigations, the URL is pushed
    /// onto the history. On failure the content shows the error and the
    /// history is left alone.
    pub fn complete_navigation(
        &mut self,
        ticket: &NavigationTicket,
        result: Result<String, FetchError>,
    ) -> NavigationOutcome {
        if ticket.token != self.latest_token {
            log::debug!(
                "Discarding stale response for {} (token {}, latest {})",
                ticket.url,
                ticket.token,
                self.latest_token
            );
            return NavigationOutcome::Stale;
        }

        match result {
            Ok(body) => {
                self.content = ContentView::Page {
                    url: ticket.url.clone(),
                    body,
                };
                if ticket.record_history {
                    self.history.visit(&ticket.url);
                }
                NavigationOutcome::Loaded
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", ticket.url, e);
                let message = view::failure_message(&e);
                self.content = ContentView::Failed {
                    url: ticket.url.clone(),
                    message: message.clone(),
                };
                NavigationOutcome::Failed(message)
            }
        }
    }

    /// Fetches a ticket's URL with `fetcher` and applies the result.
    pub async fn navigate<F>(&mut self, fetcher: &F, ticket: NavigationTicket) -> NavigationOutcome
    where
        F: PageFetcher,
    {
        let result = fetcher.fetch_body(&ticket.url).await;
        self.complete_navigation(&ticket, result)
    }

    // ─── Bookmark triggers ───

    /// Add-bookmark button: bookmarks the trimmed URL field.
    pub fn add_bookmark(&mut self) -> Result<(), BookmarkError> {
        let url = self.url_field.clone();
        self.bookmarks.add_bookmark(&url)
    }

    /// Activating a bookmark puts its URL in the field and navigates to it.
    pub fn activate_bookmark(&mut self, index: usize) -> Result<NavigationTicket, BookmarkError> {
        let url = self
            .bookmarks
            .get_bookmark(index)
            .map(|b| b.url.clone())
            .ok_or(BookmarkError::InvalidIndex(index))?;
        self.url_field = url.clone();
        Ok(self.issue_ticket(url, true))
    }

    pub fn delete_bookmark(&mut self, index: usize) -> Result<Bookmark, BookmarkError> {
        self.bookmarks.remove_bookmark(index)
    }

    /// Dispatches a single interaction on a rendered bookmark item.
    pub fn handle_bookmark_action(
        &mut self,
        action: BookmarkAction,
    ) -> Result<Option<NavigationTicket>, BookmarkError> {
        match action {
            BookmarkAction::Activate(index) => self.activate_bookmark(index).map(Some),
            BookmarkAction::Delete(index) => self.delete_bookmark(index).map(|_| None),
        }
    }

    // ─── Views ───

    pub fn nav_state(&self) -> NavState {
        self.history.nav_state()
    }

    pub fn content(&self) -> &ContentView {
        &self.content
    }

    pub fn bookmark_items(&self) -> Vec<BookmarkItem> {
        view::render_bookmarks(self.bookmarks.list_bookmarks())
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn bookmarks(&self) -> &BookmarkManager {
        &self.bookmarks
    }
}
