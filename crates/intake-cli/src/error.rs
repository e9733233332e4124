//! CLI-specific error types and mappings.
//!
//! Maps core and client errors to exit codes and user-facing messages.

use intake_core::{ApiPortError, CoreError};
use intake_pennsieve::PennsieveError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An API host could not be reached.
    #[error("API unreachable: {0}")]
    Transport(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Transport(_) => 69, // EX_UNAVAILABLE
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(ApiPortError::Transport { message }) => Self::Transport(message),
            CoreError::Api(ApiPortError::Configuration { message }) => Self::Config(message),
        }
    }
}

impl From<PennsieveError> for CliError {
    fn from(err: PennsieveError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
