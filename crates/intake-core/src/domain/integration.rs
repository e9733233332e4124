//! The integration record.

use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// A requested unit of work, as returned by the integrations endpoint.
///
/// Fields missing from the response (or explicitly `null`) decode to their
/// zero value, so a partial record still yields a usable struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Integration {
    /// Opaque integration identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Application the integration runs.
    #[serde(deserialize_with = "null_as_default")]
    pub application_id: i64,
    /// Node identifier of the dataset the packages belong to.
    #[serde(rename = "datasetId", deserialize_with = "null_as_default")]
    pub dataset_node_id: String,
    /// Package node identifiers to download, in request order.
    #[serde(deserialize_with = "null_as_default")]
    pub package_ids: Vec<String>,
    /// Application parameters. Carried through untouched.
    pub params: serde_json::Value,
}

impl Integration {
    /// Decode an integration from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
