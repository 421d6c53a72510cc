//! Pure projections of viewer state.
//!
//! Nothing here mutates state; front ends call these after every change and
//! replace whatever they showed before.

use serde::Serialize;

use crate::types::bookmark::{Bookmark, BookmarkAction};
use crate::types::errors::FetchError;
use crate::types::history::NavState;
use crate::types::page::ContentView;

/// One row of the rendered bookmark list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkItem {
    pub index: usize,
    pub url: String,
}

impl BookmarkItem {
    pub fn activate(&self) -> BookmarkAction {
        BookmarkAction::Activate(self.index)
    }

    pub fn delete(&self) -> BookmarkAction {
        BookmarkAction::Delete(self.index)
    }
}

/// Rebuilds the bookmark list from scratch.
pub fn render_bookmarks(bookmarks: &[Bookmark]) -> Vec<BookmarkItem> {
    bookmarks
        .iter()
        .enumerate()
        .map(|(index, b)| BookmarkItem {
            index,
            url: b.url.clone(),
        })
        .collect()
}

pub fn bookmark_list_text(items: &[BookmarkItem]) -> String {
    if items.is_empty() {
        return "(no bookmarks)".to_string();
    }
    items
        .iter()
        .map(|item| format!("[{}] {}  (rm {})", item.index, item.url, item.index))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Back/forward buttons; a disabled control is shown in parentheses.
pub fn nav_controls_text(state: NavState) -> String {
    let back = if state.can_go_back { "[< back]" } else { "(< back)" };
    let forward = if state.can_go_forward { "[forward >]" } else { "(forward >)" };
    format!("{} {}", back, forward)
}

/// The content region. Page bodies are shown raw.
pub fn content_text(view: &ContentView) -> String {
    match view {
        ContentView::Empty => String::new(),
        ContentView::Page { body, .. } => body.clone(),
        ContentView::Failed { message, .. } => message.clone(),
    }
}

/// Inline message shown in place of a page that failed to load.
pub fn failure_message(err: &FetchError) -> String {
    format!("Failed to load page. {}", err)
}
