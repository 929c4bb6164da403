//! ReadTheDocs HTTP Client
//!
//! A small, type-safe client for the parts of the ReadTheDocs v3 API that
//! `rtdwait` needs.
//!
//! # Example
//!
//! ```no_run
//! use rtdwait_client::ReadTheDocsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReadTheDocsClient::new("rtd-api-token");
//!
//!     let builds = client
//!         .list_running_builds("red-discordbot", "6b4ab3a1a1e4")
//!         .await?;
//!
//!     println!("{} build(s) pending", builds.pending().len());
//!     Ok(())
//! }
//! ```

mod builds;
pub mod error;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use rtdwait_core::dto::build::{BuildList, BuildQuery};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;

/// Public ReadTheDocs instance
pub const DEFAULT_BASE_URL: &str = "https://readthedocs.org";

/// HTTP client for the ReadTheDocs v3 API
///
/// Every request carries `Authorization: Token <token>`.
#[derive(Clone)]
pub struct ReadTheDocsClient {
    /// Base URL of the instance (e.g., "https://readthedocs.org")
    base_url: String,
    /// API token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ReadTheDocsClient {
    /// Create a client for the public ReadTheDocs instance
    ///
    /// # Arguments
    /// * `token` - API token from the ReadTheDocs account settings
    ///
    /// # Example
    /// ```
    /// use rtdwait_client::ReadTheDocsClient;
    ///
    /// let client = ReadTheDocsClient::new("secret");
    /// assert_eq!(client.base_url(), "https://readthedocs.org");
    /// ```
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_BASE_URL, token, Client::new())
    }

    /// Create a client with a custom base URL and HTTP client
    ///
    /// This allows pointing at a self-hosted or Business instance and
    /// configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the instance
    /// * `token` - API token
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use rtdwait_client::ReadTheDocsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ReadTheDocsClient::with_client("https://docs.example.com/", "secret", http_client);
    /// assert_eq!(client.base_url(), "https://docs.example.com");
    /// ```
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the instance
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// On a non-success status the raw body is returned untouched inside
    /// [`ClientError::ApiError`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl fmt::Debug for ReadTheDocsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadTheDocsClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
