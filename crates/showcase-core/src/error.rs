//! Error types for showcase operations.
//!
//! Talking to the API can fail in exactly one way, [`FetchError`], which
//! covers both transport failures and non-success responses. Normalizing
//! records never fails.

use thiserror::Error;

/// The unified error type for showcase operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing or submitting against the API failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Input validation errors (malformed API URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// A failed request against the showcase API.
///
/// The message is what a user should see: the server's `error` field when
/// it sent one, otherwise the HTTP status (or the transport failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    /// Human readable failure message.
    pub message: String,
    /// HTTP status code, absent for transport failures.
    pub status: Option<u16>,
}

impl FetchError {
    /// Create an error for a request that never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Create an error for a non-success HTTP response.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the server answered with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        self.status.is_some_and(|s| (400..500).contains(&s))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_displays_message_only() {
        let err = FetchError::http(400, "bad");
        assert_eq!(err.to_string(), "bad");
        assert!(err.is_client_error());
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = FetchError::transport("connection refused");
        assert_eq!(err.status, None);
        assert!(!err.is_client_error());
    }

    #[test]
    fn unified_error_wraps_fetch() {
        let err: Error = FetchError::http(500, "Internal Server Error").into();
        assert_eq!(err.to_string(), "fetch failed: Internal Server Error");
    }
}
