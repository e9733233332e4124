//! Download manifest types.

use serde::{Deserialize, Serialize};

use super::filename::extract_sub_identifier;
use super::integration::Integration;
use super::serde_helpers::null_as_default;

/// Body of the download-manifest request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadManifestRequest {
    /// Package node identifiers to resolve into presigned URLs.
    pub node_ids: Vec<String>,
}

impl DownloadManifestRequest {
    /// Create a request for the given package node identifiers.
    pub const fn new(node_ids: Vec<String>) -> Self {
        Self { node_ids }
    }
}

impl From<&Integration> for DownloadManifestRequest {
    fn from(integration: &Integration) -> Self {
        Self::new(integration.package_ids.clone())
    }
}

/// Downloadable files returned for a set of packages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Entries in the order the API returned them.
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<ManifestEntry>,
}

impl Manifest {
    /// Decode a manifest from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the manifest lists no files.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A single file in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestEntry {
    /// Package node identifier the file belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,
    /// Original filename in the upstream dataset.
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    /// Folder path segments of the package inside the dataset.
    #[serde(deserialize_with = "null_as_default")]
    pub path: Vec<String>,
    /// Presigned download URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl ManifestEntry {
    /// Filename the entry is stored under locally.
    pub fn local_file_name(&self) -> &str {
        extract_sub_identifier(&self.file_name)
    }
}
