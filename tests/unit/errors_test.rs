//! Display and conversion behaviour of the error types.

use pageview::types::errors::*;

#[test]
fn test_fetch_error_display() {
    assert_eq!(FetchError::Http(404).to_string(), "HTTP error: 404");
    assert_eq!(
        FetchError::Network("connection refused".into()).to_string(),
        "Network error: connection refused"
    );
}

#[test]
fn test_navigation_error_display() {
    assert_eq!(NavigationError::EmptyUrl.to_string(), "Please enter a URL");
}

#[test]
fn test_bookmark_error_display() {
    assert_eq!(BookmarkError::EmptyUrl.to_string(), "There is no URL to bookmark");
    assert_eq!(
        BookmarkError::DuplicateUrl("https://a.example".into()).to_string(),
        "This URL is already bookmarked: https://a.example"
    );
    assert_eq!(BookmarkError::InvalidIndex(3).to_string(), "Invalid bookmark index: 3");
}

#[test]
fn test_storage_error_converts_into_bookmark_error() {
    let err: BookmarkError = StorageError::Database("disk full".into()).into();
    assert_eq!(
        err,
        BookmarkError::Storage("Storage database error: disk full".into())
    );
}

#[test]
fn test_app_error_is_transparent() {
    let err: AppError = SettingsError::InvalidKey("x".into()).into();
    assert_eq!(err.to_string(), "Invalid settings key: x");

    let err: AppError = BookmarkError::InvalidIndex(1).into();
    assert_eq!(err.to_string(), "Invalid bookmark index: 1");

    assert_eq!(
        AppError::Client("no TLS backend".into()).to_string(),
        "HTTP client error: no TLS backend"
    );
}
