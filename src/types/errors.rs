use thiserror::Error;

// === NavigationError ===

/// Errors raised when a navigation cannot be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The URL field was empty (after trimming).
    #[error("Please enter a URL")]
    EmptyUrl,
}

// === FetchError ===

/// Errors returned by a `PageFetcher` while retrieving a page body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The request never produced a usable response.
    #[error("Network error: {0}")]
    Network(String),
}

// === BookmarkError ===

/// Errors related to bookmark management operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookmarkError {
    /// There is no URL to bookmark.
    #[error("There is no URL to bookmark")]
    EmptyUrl,
    /// A bookmark with the same URL already exists.
    #[error("This URL is already bookmarked: {0}")]
    DuplicateUrl(String),
    /// The provided list position does not exist.
    #[error("Invalid bookmark index: {0}")]
    InvalidIndex(usize),
    /// Persisting the bookmark list failed.
    #[error("Bookmark storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for BookmarkError {
    fn from(err: StorageError) -> Self {
        BookmarkError::Storage(err.to_string())
    }
}

// === StorageError ===

/// Errors related to the key-value persistence layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Database operation failed.
    #[error("Storage database error: {0}")]
    Database(String),
    /// Failed to serialize or deserialize a stored value.
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === AppError ===

/// Errors raised while assembling the application at start-up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),
}
