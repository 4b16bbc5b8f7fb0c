//! Error types
//!
//! [`FetchError`] is the detail carried by a reject reply and travels back to
//! the calling actor. [`TransportError`] covers failures on the host side:
//! building the client and routing envelopes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a call produced no response
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Unsupported method: {0}")]
    InvalidMethod(String),
    #[error("Error reading body: {0}")]
    Body(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("No async runtime to run the call on: {0}")]
    Runtime(String),
    #[error("Call ended without a reply: {0}")]
    Abandoned(String),
}

impl FetchError {
    /// Classify an error returned by `send()`
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else if err.is_builder() {
            FetchError::InvalidRequest(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }

    /// Stable name of the variant, as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Connect(_) => "connect",
            FetchError::Timeout(_) => "timeout",
            FetchError::InvalidRequest(_) => "invalid_request",
            FetchError::InvalidMethod(_) => "invalid_method",
            FetchError::Body(_) => "body",
            FetchError::Request(_) => "request",
            FetchError::Runtime(_) => "runtime",
            FetchError::Abandoned(_) => "abandoned",
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("no transport accepts destination {destination}")]
    NoTransport { destination: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_kind_and_message() {
        let err = FetchError::Connect("refused".to_string());
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "kind": "connect", "message": "refused" })
        );

        let err = FetchError::InvalidMethod("BREW".to_string());
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], err.kind());
    }

    #[test]
    fn test_display() {
        let err = FetchError::Body("eof".to_string());
        assert_eq!(err.to_string(), "Error reading body: eof");
    }
}
