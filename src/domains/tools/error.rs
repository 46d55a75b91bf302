//! Tool-specific error types.
//!
//! The variants mirror the failure modes of a Honeybadger query: bad caller
//! arguments, a non-200 upstream response, a 200 response whose body is not
//! valid JSON, and the network stack itself failing. All of them are
//! converted into an `{"error": <message>}` tool result at the adapter
//! boundary; none escape as protocol-level errors.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Honeybadger API answered with a non-200 status. This is an
    /// expected outcome (unknown fault id, rate limiting, auth failure).
    #[error("HTTP {status} - {body}")]
    Upstream { status: u16, body: String },

    /// The Honeybadger API answered 200 but the body was not valid JSON.
    /// Kept distinct from [`ToolError::Upstream`]: it signals a broken
    /// upstream contract, not a failed query.
    #[error("Upstream returned invalid JSON: {0}")]
    Protocol(#[from] serde_json::Error),

    /// The request itself failed (connect error, timeout, cancelled).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_message() {
        let err = ToolError::Upstream {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 - Not Found");
    }

    #[test]
    fn test_protocol_error_distinct_from_upstream() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ToolError::from(json_err);
        assert!(matches!(err, ToolError::Protocol(_)));
        assert!(err.to_string().starts_with("Upstream returned invalid JSON"));
    }
}
