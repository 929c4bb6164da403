//! Terminal failures of a wait

use std::time::Duration;

use rtdwait_client::ClientError;
use thiserror::Error;

/// Why waiting for the builds failed
#[derive(Debug, Error)]
pub enum WaitError {
    /// The API answered with a non-success status; never retried
    #[error("API request to ReadTheDocs failed with status code {status} and response:\n{body}")]
    Api { status: u16, body: String },

    /// The API answered 2xx with a body that is not a build list
    #[error("ReadTheDocs returned an unreadable response: {0}")]
    InvalidResponse(String),

    /// The deadline passed while builds were still pending
    #[error("Waiting for ReadTheDocs builds to finish timed out after {budget:?}")]
    Timeout { budget: Duration },

    #[error(transparent)]
    Client(ClientError),
}

impl From<ClientError> for WaitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, message } => WaitError::Api {
                status,
                body: message,
            },
            ClientError::ParseError(message) => WaitError::InvalidResponse(message),
            other => WaitError::Client(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status_and_body() {
        let err = WaitError::from(ClientError::api_error(401, "unauthorized"));
        assert!(matches!(
            &err,
            WaitError::Api { status: 401, body } if body == "unauthorized"
        ));
        assert_eq!(
            err.to_string(),
            "API request to ReadTheDocs failed with status code 401 and response:\nunauthorized"
        );
    }

    #[test]
    fn test_parse_error_is_invalid_response() {
        let err = WaitError::from(ClientError::ParseError("expected value".to_string()));
        assert!(matches!(err, WaitError::InvalidResponse(_)));
    }

    #[test]
    fn test_timeout_message() {
        let err = WaitError::Timeout {
            budget: Duration::from_secs(900),
        };
        assert_eq!(
            err.to_string(),
            "Waiting for ReadTheDocs builds to finish timed out after 900s"
        );
    }
}
