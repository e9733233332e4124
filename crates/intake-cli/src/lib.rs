#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;

// Re-export primary types for convenient access
pub use bootstrap::{DefaultIntakeService, IntakeContext, bootstrap};
pub use config::{IntakeArgs, IntakeConfig};
pub use error::{CliError, exit_code_for};
pub use logging::{LogFormat, LogGuard, LoggingConfig, init_logging};
