//! Command-line and environment configuration.
//!
//! Every flag falls back to the environment variable the intake container is
//! launched with, so the binary runs unchanged with no arguments at all.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use intake_download::{DEFAULT_DOWNLOADER, DownloaderCommand};
use intake_pennsieve::PennsieveClientConfig;

use crate::logging::{DEFAULT_LOG_FILTER, LogFormat, LoggingConfig};

/// Download the files of a Pennsieve integration into a local directory.
#[derive(Debug, Parser)]
#[command(name = "pennsieve-intake")]
#[command(about = "Download the files of a Pennsieve integration into a local directory")]
#[command(version)]
pub struct IntakeArgs {
    /// Integration to run
    #[arg(long, env = "INTEGRATION_ID", default_value = "")]
    pub integration_id: String,

    /// Directory files are downloaded into (defaults to the current directory)
    #[arg(long, env = "INPUT_DIR", default_value = "")]
    pub input_dir: String,

    /// Session token for both API calls
    #[arg(long, env = "SESSION_TOKEN", default_value = "", hide_env_values = true)]
    pub session_token: String,

    /// Packages API host
    #[arg(long, env = "PENNSIEVE_API_HOST", default_value = "")]
    pub api_host: String,

    /// Workflow API host serving integrations
    #[arg(long, env = "PENNSIEVE_API_HOST2", default_value = "")]
    pub workflow_host: String,

    /// Download utility, optionally with leading arguments (e.g. "busybox wget")
    #[arg(long, env = "INTAKE_DOWNLOADER", default_value = DEFAULT_DOWNLOADER)]
    pub downloader: String,

    /// HTTP request timeout in seconds (no timeout when unset)
    #[arg(long, env = "INTAKE_HTTP_TIMEOUT_SECS")]
    pub http_timeout_secs: Option<u64>,

    /// Log filter directives (e.g. "info" or "intake_core=debug,warn")
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Integration to run.
    pub integration_id: String,
    /// Directory files are downloaded into.
    pub input_dir: PathBuf,
    /// Pennsieve client settings.
    pub client: PennsieveClientConfig,
    /// Download utility invocation.
    pub downloader: DownloaderCommand,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl IntakeArgs {
    /// Resolve arguments into a run configuration.
    pub fn into_config(self) -> IntakeConfig {
        let input_dir = if self.input_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(self.input_dir)
        };

        let client = PennsieveClientConfig::new(self.session_token)
            .with_api_host(self.api_host)
            .with_workflow_host(self.workflow_host)
            .with_optional_timeout(self.http_timeout_secs.map(Duration::from_secs));

        IntakeConfig {
            integration_id: self.integration_id,
            input_dir,
            client,
            downloader: DownloaderCommand::parse(&self.downloader),
            logging: LoggingConfig {
                filter: self.log_filter,
                format: self.log_format,
            },
        }
    }
}
