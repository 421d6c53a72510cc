// pageview state managers
// Managers handle stateful operations: session history and bookmarks.

pub mod bookmark_manager;
pub mod history_manager;
