//! Error types for the ReadTheDocs client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the ReadTheDocs API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and response body
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error happened at the transport level (no HTTP status)
    ///
    /// Builder errors come from the request itself (bad URL, bad header)
    /// and would fail the same way on every attempt.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if !e.is_builder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_request_failures_are_transport() {
        assert!(!ClientError::api_error(401, "unauthorized").is_transport());
        assert!(!ClientError::api_error(503, "Service Unavailable").is_transport());
        assert!(!ClientError::ParseError("expected value".to_string()).is_transport());
        assert!(!ClientError::InvalidRequest("bad header".to_string()).is_transport());
    }

    #[test]
    fn test_builder_error_is_not_transport() {
        let err = reqwest::Client::new()
            .get("http://localhost:8000/")
            .header("Authorization", "Token secret\n")
            .build()
            .unwrap_err();
        assert!(err.is_builder());
        assert!(!ClientError::from(err).is_transport());
    }

    #[test]
    fn test_api_error_display_keeps_body() {
        let err = ClientError::api_error(404, "{\"detail\": \"Not found.\"}");
        assert_eq!(
            err.to_string(),
            "API error (status 404): {\"detail\": \"Not found.\"}"
        );
    }
}
