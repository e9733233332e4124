//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are wired together:
//! - Pennsieve client (via intake-pennsieve)
//! - Process downloader (via intake-download)
//! - Intake service (via intake-core)

use intake_core::{IntakeService, RunSummary};
use intake_download::ProcessDownloader;
use intake_pennsieve::DefaultPennsieveClient;

use crate::config::IntakeConfig;
use crate::error::CliError;

/// Service type the binary runs.
pub type DefaultIntakeService = IntakeService<DefaultPennsieveClient, ProcessDownloader>;

/// Fully composed context for one run.
pub struct IntakeContext {
    /// Integration to run.
    pub integration_id: String,
    /// The composed service.
    pub service: DefaultIntakeService,
}

impl IntakeContext {
    /// Run the configured integration.
    pub async fn run(&self) -> Result<RunSummary, CliError> {
        Ok(self.service.run(&self.integration_id).await?)
    }
}

/// Bootstrap the adapters and the service from configuration.
pub fn bootstrap(config: &IntakeConfig) -> Result<IntakeContext, CliError> {
    let client = DefaultPennsieveClient::new(config.client.clone())?;
    let downloader = ProcessDownloader::new(config.downloader.clone());

    Ok(IntakeContext {
        integration_id: config.integration_id.clone(),
        service: IntakeService::new(client, downloader, config.input_dir.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntakeArgs;
    use clap::Parser;

    fn config(host: &str) -> IntakeConfig {
        IntakeArgs::parse_from([
            "pennsieve-intake",
            "--integration-id",
            "int-1",
            "--input-dir",
            "/tmp/intake",
            "--api-host",
            host,
            "--workflow-host",
            host,
        ])
        .into_config()
    }

    #[test]
    fn test_bootstrap_carries_integration_id() {
        let ctx = bootstrap(&config("https://api.pennsieve.io")).unwrap();
        assert_eq!(ctx.integration_id, "int-1");
    }

    #[tokio::test]
    async fn test_unreachable_host_aborts_with_transport_error() {
        let ctx = bootstrap(&config("http://127.0.0.1:1")).unwrap();
        let err = ctx.run().await.unwrap_err();
        assert!(matches!(err, CliError::Transport(_)), "got {err:?}");
        assert_eq!(err.exit_code(), 69);
    }

    #[tokio::test]
    async fn test_blank_host_aborts_with_config_error() {
        let ctx = bootstrap(&config("")).unwrap();
        let err = ctx.run().await.unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }
}
