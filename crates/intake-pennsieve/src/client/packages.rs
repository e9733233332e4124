//! Package download manifests.

use intake_core::DownloadManifestRequest;

use super::PennsieveClient;
use crate::error::PennsieveResult;
use crate::http::{HttpBackend, HttpRequest};
use crate::url::download_manifest_url;

impl<B: HttpBackend> PennsieveClient<B> {
    /// Request presigned download URLs for a set of packages.
    pub async fn get_download_manifest(
        &self,
        request: &DownloadManifestRequest,
    ) -> PennsieveResult<Vec<u8>> {
        let url = download_manifest_url(&self.config.api_host, &self.config.session_token)?;
        let body = serde_json::to_vec(request)?;
        let request = HttpRequest::post(url, body)
            .header("accept", "*/*")
            .header("content-type", "application/json");

        self.execute(request).await
    }
}
