//! Content fetching for pageview.
//!
//! A single GET per navigation; the raw body is handed back untouched.

use std::future::Future;
use std::time::Duration;

use crate::types::errors::{AppError, FetchError};
use crate::types::settings::NetworkSettings;

/// Retrieves the body of a page.
pub trait PageFetcher {
    /// Fetches `url`. Non-success status codes are errors.
    fn fetch_body(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// `PageFetcher` over a shared `reqwest` client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(settings: &NetworkSettings) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs));
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_body(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            log::debug!("GET {}", url);
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Http(status.as_u16()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))
        }
    }
}
