//! Domain types for an intake run.
//!
//! Everything here is plain data plus pure functions. Nothing in this module
//! performs I/O.

mod filename;
mod integration;
mod manifest;
mod serde_helpers;

pub use filename::{SUBJECT_MARKER, extract_sub_identifier};
pub use integration::Integration;
pub use manifest::{DownloadManifestRequest, Manifest, ManifestEntry};
