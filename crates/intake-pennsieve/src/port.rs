//! Port trait implementation for `PennsieveClient`.
//!
//! Implements the core-owned `PennsieveApiPort` and maps internal errors into
//! `ApiPortError`.

use async_trait::async_trait;
use intake_core::{ApiPortError, ApiPortResult, DownloadManifestRequest, PennsieveApiPort};

use crate::client::PennsieveClient;
use crate::error::PennsieveError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PennsieveError` to core `ApiPortError`.
fn map_error(err: PennsieveError) -> ApiPortError {
    match err {
        PennsieveError::InvalidHost { .. } | PennsieveError::Json(_) => {
            ApiPortError::Configuration {
                message: err.to_string(),
            }
        }
        // Drop the URL: the manifest query string carries the session token
        PennsieveError::Network(e) if e.is_builder() => ApiPortError::Configuration {
            message: e.without_url().to_string(),
        },
        PennsieveError::Network(e) => ApiPortError::Transport {
            message: e.without_url().to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> PennsieveApiPort for PennsieveClient<B> {
    async fn fetch_integration(&self, integration_id: &str) -> ApiPortResult<Vec<u8>> {
        self.get_integration(integration_id).await.map_err(map_error)
    }

    async fn fetch_download_manifest(
        &self,
        request: &DownloadManifestRequest,
    ) -> ApiPortResult<Vec<u8>> {
        self.get_download_manifest(request)
            .await
            .map_err(map_error)
    }
}
