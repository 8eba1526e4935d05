//! Internal error types for remote glossary operations.
//!
//! These errors are internal to `goyaku-remote` and are mapped to the core
//! `SourceError` at the port boundary.

use thiserror::Error;

/// Result type alias for remote glossary operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors related to fetching a glossary document.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Request failed with an HTTP error status.
    #[error("document request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The body did not decode as the expected flat string map.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_carries_status_and_url() {
        let err = RemoteError::RequestFailed {
            status: 503,
            url: "https://example.com/dic.ja.json".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("dic.ja.json"));
    }

    #[test]
    fn json_parse_error_wraps_serde() {
        let serde_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = RemoteError::from(serde_err);
        assert!(matches!(err, RemoteError::JsonParse(_)));
    }
}
