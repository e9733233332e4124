//! URL construction helpers for the Pennsieve API.

use url::Url;

use crate::error::{PennsieveError, PennsieveResult};

/// Build `{host}/integrations/{integration_id}`.
pub fn integration_url(host: &str, integration_id: &str) -> PennsieveResult<Url> {
    let mut url = base_url(host)?;
    push_segments(&mut url, host, &["integrations", integration_id])?;
    Ok(url)
}

/// Build `{host}/packages/download-manifest?api_key={session_token}`.
pub fn download_manifest_url(host: &str, session_token: &str) -> PennsieveResult<Url> {
    let mut url = base_url(host)?;
    push_segments(&mut url, host, &["packages", "download-manifest"])?;
    url.query_pairs_mut().append_pair("api_key", session_token);
    Ok(url)
}

fn base_url(host: &str) -> PennsieveResult<Url> {
    Url::parse(host.trim()).map_err(|e| PennsieveError::InvalidHost {
        host: host.to_string(),
        reason: e.to_string(),
    })
}

fn push_segments(url: &mut Url, host: &str, segments: &[&str]) -> PennsieveResult<()> {
    url.path_segments_mut()
        .map_err(|()| PennsieveError::InvalidHost {
            host: host.to_string(),
            reason: "cannot be used as a base URL".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}
