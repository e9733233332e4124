//! Internal error types for Pennsieve API operations.
//!
//! These are mapped to `intake_core::ApiPortError` at the port boundary.

use thiserror::Error;

/// Result type alias for Pennsieve operations.
pub type PennsieveResult<T> = Result<T, PennsieveError>;

/// Errors related to Pennsieve API operations.
#[derive(Debug, Error)]
pub enum PennsieveError {
    /// A configured host cannot be used as a base URL.
    #[error("Invalid API host '{host}': {reason}")]
    InvalidHost {
        /// The configured host
        host: String,
        /// Why it was rejected
        reason: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_host_error_message() {
        let error = PennsieveError::InvalidHost {
            host: "api.pennsieve.io".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("api.pennsieve.io"));
        assert!(msg.contains("relative URL"));
    }
}
