//! Core services.

mod intake;

pub use intake::{FailedFile, IntakeService, RunSummary};
