//! pageview persistence layer.
//!
//! Provides the [`KeyValueStore`] seam used by the bookmark store, a SQLite
//! implementation with schema migrations, and an in-memory implementation.
//!
//! # Usage
//!
//! ```no_run
//! use pageview::database::{Database, KeyValueStore};
//!
//! // Open a persistent database
//! let mut db = Database::open("pageview.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let mut db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! db.set("bookmarks", "[]").expect("write failed");
//! assert_eq!(db.get("bookmarks").unwrap().as_deref(), Some("[]"));
//! ```

pub mod connection;
pub mod memory;
pub mod migrations;

pub use connection::Database;
pub use memory::MemoryStore;

use crate::types::errors::StorageError;

/// Flat string key-value storage whose contents survive restarts.
///
/// Every `set` replaces the whole value stored under `key`.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
