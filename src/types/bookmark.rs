use serde::{Deserialize, Serialize};

/// A saved location. Persisted as `{"url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A single interaction on a rendered bookmark item.
///
/// Each interaction carries exactly one action, so deleting an item can
/// never also activate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkAction {
    /// Navigate to the bookmark at this list position.
    Activate(usize),
    /// Remove the bookmark at this list position.
    Delete(usize),
}
