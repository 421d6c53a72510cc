use serde::{Deserialize, Serialize};

/// Top-level viewer settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub network: NetworkSettings,
    pub storage: StorageSettings,
}

/// Settings applied to every page fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSettings {
    pub user_agent: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            user_agent: format!("pageview/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            use_system_proxy: true,
        }
    }
}

/// Where the bookmark database lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// Explicit database file; `None` means `pageview.db` in the data directory.
    pub database_file: Option<String>,
}
