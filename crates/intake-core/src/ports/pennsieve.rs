//! Pennsieve API port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DownloadManifestRequest;

/// Errors from Pennsieve API port operations.
///
/// HTTP status codes are deliberately absent: a response with any status is
/// returned as a body, and only requests that never complete produce an error.
#[derive(Debug, Error)]
pub enum ApiPortError {
    /// The request could not be sent or its response could not be read.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure
        message: String,
    },

    /// The request could not be built (bad host, bad identifier).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for Pennsieve API port operations.
pub type ApiPortResult<T> = Result<T, ApiPortError>;

/// Port trait for the two Pennsieve API calls an intake run makes.
///
/// Both methods return the raw response body; decoding is the caller's job.
#[async_trait]
pub trait PennsieveApiPort: Send + Sync {
    /// Fetch the integration record.
    ///
    /// # Arguments
    ///
    /// * `integration_id` - Integration identifier (e.g., a UUID)
    async fn fetch_integration(&self, integration_id: &str) -> ApiPortResult<Vec<u8>>;

    /// Fetch presigned download URLs for the requested packages.
    async fn fetch_download_manifest(
        &self,
        request: &DownloadManifestRequest,
    ) -> ApiPortResult<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn PennsieveApiPort>) {}
}
