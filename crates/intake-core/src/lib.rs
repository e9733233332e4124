#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DownloadManifestRequest, Integration, Manifest, ManifestEntry, SUBJECT_MARKER,
    extract_sub_identifier,
};
pub use ports::{
    ApiPortError, ApiPortResult, CoreError, DownloadOutput, DownloadPortError, FileDownload,
    FileDownloaderPort, PennsieveApiPort,
};
pub use services::{FailedFile, IntakeService, RunSummary};
