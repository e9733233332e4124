//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core service needs from the outside
//! world. Adapters implement them:
//!
//! - `PennsieveApiPort` - implemented by `intake-pennsieve`
//! - `FileDownloaderPort` - implemented by `intake-download`
//!
//! # Design Rules
//!
//! - No HTTP or process types in signatures
//! - Adapters map their internal errors into the port error types here

mod downloader;
mod pennsieve;

pub use downloader::{DownloadOutput, DownloadPortError, FileDownload, FileDownloaderPort};
pub use pennsieve::{ApiPortError, ApiPortResult, PennsieveApiPort};

#[cfg(test)]
pub use downloader::MockFileDownloaderPort;

use thiserror::Error;

/// Errors that abort an intake run.
///
/// Decode failures and per-file download failures are logged and absorbed by
/// the service; only API failures surface to the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An API call could not be completed.
    #[error(transparent)]
    Api(#[from] ApiPortError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_convert_transparently() {
        let err = CoreError::from(ApiPortError::Transport {
            message: "connection refused".to_string(),
        });
        assert!(matches!(err, CoreError::Api(ApiPortError::Transport { .. })));
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }
}
