use serde::Serialize;

/// A navigation that has been started but whose fetch has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTicket {
    /// Monotonically increasing request token; only the latest one is applied.
    pub token: u64,
    pub url: String,
    /// Push `url` onto the history once the page loads.
    pub record_history: bool,
}

/// What the content region currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContentView {
    #[default]
    Empty,
    /// Raw response body, displayed unmodified.
    Page { url: String, body: String },
    Failed { url: String, message: String },
}

/// Result of applying a finished fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum NavigationOutcome {
    Loaded,
    Failed(String),
    /// A newer navigation was issued before this one finished.
    Stale,
}
