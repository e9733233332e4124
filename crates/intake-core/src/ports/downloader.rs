//! External file downloader port.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// A single file to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDownload {
    /// Source URL (usually presigned).
    pub url: String,
    /// Filename to save under, relative to `destination_dir`.
    pub file_name: String,
    /// Directory the downloader runs in.
    pub destination_dir: PathBuf,
}

impl FileDownload {
    /// Create a new download request.
    pub fn new(
        url: impl Into<String>,
        file_name: impl Into<String>,
        destination_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.into(),
            destination_dir: destination_dir.into(),
        }
    }
}

/// Output streams captured from a downloader invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error (wget writes its verbose log here).
    pub stderr: String,
}

/// Errors from a downloader invocation.
#[derive(Debug, Error)]
pub enum DownloadPortError {
    /// The downloader could not be started.
    #[error("Failed to launch '{program}': {message}")]
    Launch {
        /// Program that was invoked
        program: String,
        /// Description of the failure
        message: String,
    },

    /// The downloader ran and reported failure.
    #[error("'{program}' failed with {status}")]
    Failed {
        /// Program that was invoked
        program: String,
        /// Exit status as reported by the OS
        status: String,
        /// Streams captured before it exited
        output: DownloadOutput,
    },
}

impl DownloadPortError {
    /// Captured standard error, empty if the downloader never ran.
    pub fn stderr(&self) -> &str {
        match self {
            Self::Launch { .. } => "",
            Self::Failed { output, .. } => &output.stderr,
        }
    }
}

/// Port trait for the external download utility.
///
/// One call fetches one file and blocks (asynchronously) until the utility
/// exits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileDownloaderPort: Send + Sync {
    /// Download a single file.
    async fn download(&self, request: &FileDownload) -> Result<DownloadOutput, DownloadPortError>;
}
