//! CLI entry point.
//!
//! One run, one integration: parse configuration, install logging, bootstrap
//! the adapters, and run the intake service to completion.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use intake_cli::{IntakeArgs, IntakeConfig, bootstrap, exit_code_for, init_logging};
use intake_core::RunSummary;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let config = IntakeArgs::parse().into_config();
    let _log_guard = init_logging(&config.logging);

    match run(&config).await {
        Ok(summary) => {
            if summary.is_complete() {
                info!(attempted = summary.attempted, "Intake run finished");
            } else {
                warn!(
                    attempted = summary.attempted,
                    succeeded = summary.succeeded,
                    failed = summary.failures.len(),
                    "Intake run finished with failed downloads"
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "Intake run aborted");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

async fn run(config: &IntakeConfig) -> anyhow::Result<RunSummary> {
    let ctx = bootstrap(config).context("Failed to initialise intake components")?;
    let summary = ctx
        .run()
        .await
        .with_context(|| format!("Integration {} could not be fetched", ctx.integration_id))?;
    Ok(summary)
}
