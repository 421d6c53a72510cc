//! History Manager for pageview.
//!
//! Implements `HistoryManagerTrait` as an in-memory list of visited URLs plus a
//! cursor marking the entry currently on screen. Nothing here is persisted.

use crate::types::history::NavState;

/// Trait defining session history operations.
pub trait HistoryManagerTrait {
    fn visit(&mut self, url: &str);
    fn go_back(&mut self) -> Option<&str>;
    fn go_forward(&mut self) -> Option<&str>;
    fn nav_state(&self) -> NavState;
    fn current(&self) -> Option<&str>;
    fn entries(&self) -> &[String];
    fn cursor(&self) -> Option<usize>;
}

/// Linear back/forward history.
///
/// Invariant: `cursor` is `None` exactly when `entries` is empty, and
/// otherwise indexes into `entries`.
#[derive(Debug, Default, Clone)]
pub struct HistoryManager {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Records a new visit. Entries after the cursor are discarded first.
    fn visit(&mut self, url: &str) {
        if let Some(i) = self.cursor {
            self.entries.truncate(i + 1);
        }
        self.entries.push(url.to_string());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Moves the cursor one entry back and returns the URL to replay.
    fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        let i = self.cursor? - 1;
        self.cursor = Some(i);
        self.entries.get(i).map(String::as_str)
    }

    /// Moves the cursor one entry forward and returns the URL to replay.
    fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        let i = self.cursor? + 1;
        self.cursor = Some(i);
        self.entries.get(i).map(String::as_str)
    }

    fn nav_state(&self) -> NavState {
        NavState {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
        }
    }

    fn current(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }

    fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}
