//! Process-backed downloader.

use std::process::Stdio;

use async_trait::async_trait;
use intake_core::{DownloadOutput, DownloadPortError, FileDownload, FileDownloaderPort};
use tokio::process::Command;
use tracing::debug;

use crate::command::DownloaderCommand;

/// Runs the configured download utility once per file and waits for it.
#[derive(Debug, Clone, Default)]
pub struct ProcessDownloader {
    command: DownloaderCommand,
}

impl ProcessDownloader {
    /// Create a downloader for the given command.
    pub const fn new(command: DownloaderCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl FileDownloaderPort for ProcessDownloader {
    async fn download(&self, request: &FileDownload) -> Result<DownloadOutput, DownloadPortError> {
        let program = &self.command.program;
        debug!(
            program = %program,
            file_name = %request.file_name,
            dir = %request.destination_dir.display(),
            "Running downloader"
        );

        let output = Command::new(program)
            .args(self.command.args_for(request))
            .current_dir(&request.destination_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DownloadPortError::Launch {
                program: program.clone(),
                message: e.to_string(),
            })?;

        let captured = DownloadOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if output.status.success() {
            Ok(captured)
        } else {
            Err(DownloadPortError::Failed {
                program: program.clone(),
                status: output.status.to_string(),
                output: captured,
            })
        }
    }
}
