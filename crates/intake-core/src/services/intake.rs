//! Intake service - runs one integration end to end.
//!
//! The run is strictly sequential: fetch the integration, fetch the download
//! manifest for its packages, then hand each manifest entry to the downloader
//! one at a time.
//!
//! Failure handling differs per stage:
//! - API errors abort the run before anything is downloaded.
//! - Undecodable response bodies are logged and replaced by empty values.
//! - A failed download is logged and the next entry is attempted.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::domain::{DownloadManifestRequest, Integration, Manifest, ManifestEntry};
use crate::ports::{CoreError, FileDownload, FileDownloaderPort, PennsieveApiPort};

/// A manifest entry that could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    /// Package node identifier of the entry.
    pub node_id: String,
    /// Local filename the entry was being saved under.
    pub file_name: String,
    /// Rendered downloader error.
    pub error: String,
}

/// Outcome of the download phase of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries handed to the downloader.
    pub attempted: usize,
    /// Entries the downloader reported as successful.
    pub succeeded: usize,
    /// Entries that failed, in manifest order.
    pub failures: Vec<FailedFile>,
}

impl RunSummary {
    /// Whether every attempted entry was downloaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Download driver for a single integration.
pub struct IntakeService<A, D> {
    api: A,
    downloader: D,
    input_dir: PathBuf,
}

impl<A, D> IntakeService<A, D>
where
    A: PennsieveApiPort,
    D: FileDownloaderPort,
{
    /// Create a service that saves files into `input_dir`.
    pub const fn new(api: A, downloader: D, input_dir: PathBuf) -> Self {
        Self {
            api,
            downloader,
            input_dir,
        }
    }

    /// Run the integration: fetch, resolve, download.
    ///
    /// Returns an error only when an API call fails outright. Per-file
    /// failures are reported in the summary.
    pub async fn run(&self, integration_id: &str) -> Result<RunSummary, CoreError> {
        info!(integration_id, "Starting intake run");

        let integration = self.load_integration(integration_id).await?;
        let manifest = self.load_manifest(&integration).await?;

        Ok(self.download_all(&manifest).await)
    }

    /// Fetch and decode the integration record.
    ///
    /// A body that does not decode yields `Integration::default()`.
    pub async fn load_integration(&self, integration_id: &str) -> Result<Integration, CoreError> {
        let body = self.api.fetch_integration(integration_id).await?;
        debug!(body = %String::from_utf8_lossy(&body), "Integration response");

        let integration = decode_or_default(&body, "integration", Integration::from_slice);
        debug!(?integration, "Decoded integration");
        Ok(integration)
    }

    /// Fetch and decode the download manifest for the integration's packages.
    ///
    /// A body that does not decode yields an empty manifest.
    pub async fn load_manifest(&self, integration: &Integration) -> Result<Manifest, CoreError> {
        let request = DownloadManifestRequest::from(integration);
        debug!(node_ids = ?request.node_ids, "Requesting download manifest");

        // The body holds presigned URLs, so only its size is logged
        let body = self.api.fetch_download_manifest(&request).await?;
        debug!(bytes = body.len(), "Download manifest response");

        let manifest = decode_or_default(&body, "manifest", Manifest::from_slice);
        if manifest.is_empty() {
            warn!("Download manifest lists no files");
        } else {
            debug!(entries = manifest.len(), "Decoded download manifest");
        }
        Ok(manifest)
    }

    /// Download every manifest entry in order.
    pub async fn download_all(&self, manifest: &Manifest) -> RunSummary {
        let mut summary = RunSummary::default();

        for entry in &manifest.data {
            summary.attempted += 1;
            match self.download_entry(entry).await {
                Ok(()) => summary.succeeded += 1,
                Err(failure) => summary.failures.push(failure),
            }
        }

        summary
    }

    async fn download_entry(&self, entry: &ManifestEntry) -> Result<(), FailedFile> {
        let file_name = entry.local_file_name();
        debug!(
            node_id = %entry.node_id,
            original = %entry.file_name,
            extracted = %file_name,
            "Resolved local filename"
        );

        let request = FileDownload::new(entry.url.as_str(), file_name, self.input_dir.as_path());
        match self.downloader.download(&request).await {
            Ok(output) => {
                debug!(
                    file_name,
                    stdout = %output.stdout,
                    stderr = %output.stderr,
                    "Download finished"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    node_id = %entry.node_id,
                    file_name,
                    error = %e.stderr(),
                    "Download failed: {e}"
                );
                Err(FailedFile {
                    node_id: entry.node_id.clone(),
                    file_name: file_name.to_string(),
                    error: e.to_string(),
                })
            }
        }
    }
}

fn decode_or_default<T, F>(body: &[u8], kind: &str, decode: F) -> T
where
    T: Default,
    F: FnOnce(&[u8]) -> Result<T, serde_json::Error>,
{
    decode(body).unwrap_or_else(|e| {
        error!(kind, error = %e, "Failed to decode response body, continuing with empty value");
        T::default()
    })
}
