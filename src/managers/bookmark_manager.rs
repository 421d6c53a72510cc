//! Bookmark Manager for pageview.
//!
//! Implements `BookmarkManagerTrait` as a deduplicated, insertion-ordered list
//! of bookmarks, written back in full to a `KeyValueStore` after every change.

use crate::database::KeyValueStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{BookmarkError, StorageError};

/// Key under which the serialized bookmark array is stored.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn load(&mut self) -> Result<(), BookmarkError>;
    fn add_bookmark(&mut self, url: &str) -> Result<(), BookmarkError>;
    fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark, BookmarkError>;
    fn list_bookmarks(&self) -> &[Bookmark];
    fn get_bookmark(&self, index: usize) -> Option<&Bookmark>;
    fn contains(&self, url: &str) -> bool;
}

/// Bookmark manager backed by a key-value store.
pub struct BookmarkManager {
    store: Box<dyn KeyValueStore>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    /// Creates an empty manager over `store`. Call [`BookmarkManagerTrait::load`]
    /// to pull in previously saved bookmarks.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            bookmarks: Vec::new(),
        }
    }

    /// Creates a manager and loads the persisted list immediately.
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self, BookmarkError> {
        let mut manager = Self::new(store);
        manager.load()?;
        Ok(manager)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Returns the raw blob currently persisted, if any.
    pub fn persisted_blob(&self) -> Result<Option<String>, BookmarkError> {
        Ok(self.store.get(BOOKMARKS_KEY)?)
    }

    /// Overwrites the stored blob with the full in-memory list.
    fn save(&mut self) -> Result<(), BookmarkError> {
        let json = serde_json::to_string(&self.bookmarks)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(BOOKMARKS_KEY, &json)?;
        Ok(())
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Replaces the in-memory list with the persisted one.
    ///
    /// A missing blob yields an empty list. A malformed blob also yields an
    /// empty list; it is left in storage until the next mutation overwrites it.
    fn load(&mut self) -> Result<(), BookmarkError> {
        self.bookmarks = match self.store.get(BOOKMARKS_KEY)? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<Bookmark>>(&blob) {
                Ok(bookmarks) => bookmarks,
                Err(e) => {
                    log::warn!("Ignoring malformed bookmark data: {}", e);
                    Vec::new()
                }
            },
        };
        log::debug!("Loaded {} bookmarks", self.bookmarks.len());
        Ok(())
    }

    /// Appends a bookmark and persists the list.
    ///
    /// Rejects an empty (after trimming) or already-bookmarked URL without
    /// changing anything.
    fn add_bookmark(&mut self, url: &str) -> Result<(), BookmarkError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(BookmarkError::EmptyUrl);
        }
        if self.contains(url) {
            return Err(BookmarkError::DuplicateUrl(url.to_string()));
        }

        self.bookmarks.push(Bookmark::new(url));
        if let Err(e) = self.save() {
            self.bookmarks.pop();
            return Err(e);
        }
        log::info!("Bookmarked {}", url);
        Ok(())
    }

    /// Removes the bookmark at a rendered list position and persists the list.
    fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark, BookmarkError> {
        if index >= self.bookmarks.len() {
            return Err(BookmarkError::InvalidIndex(index));
        }

        let removed = self.bookmarks.remove(index);
        if let Err(e) = self.save() {
            self.bookmarks.insert(index, removed);
            return Err(e);
        }
        log::info!("Removed bookmark {}", removed.url);
        Ok(removed)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn get_bookmark(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    /// Exact-string URL match.
    fn contains(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }
}
