//! Pennsieve client for fetching integrations and download manifests.

mod integrations;
mod packages;

use tracing::{debug, warn};

use crate::config::PennsieveClientConfig;
use crate::error::PennsieveResult;
use crate::http::{HttpBackend, HttpRequest, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Pennsieve client using the reqwest HTTP backend.
pub type DefaultPennsieveClient = PennsieveClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Pennsieve API.
///
/// Generic over an HTTP backend so requests can be captured in tests. Use
/// `DefaultPennsieveClient` in production code.
pub struct PennsieveClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: PennsieveClientConfig,
}

impl DefaultPennsieveClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PennsieveClientConfig) -> PennsieveResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> PennsieveClient<B> {
    /// Create a new client with a custom backend.
    pub const fn with_backend(config: PennsieveClientConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Send a request and return its body whatever the status.
    async fn execute(&self, request: HttpRequest) -> PennsieveResult<Vec<u8>> {
        let method = request.method;
        // The query string may carry the session token
        let path = request.url.path().to_string();

        let response = self.backend.send(request).await?;
        if response.is_success() {
            debug!(?method, %path, status = response.status, bytes = response.body.len(), "API response");
        } else {
            warn!(?method, %path, status = response.status, "API returned a non-success status");
        }

        Ok(response.body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;

    pub fn test_config() -> PennsieveClientConfig {
        PennsieveClientConfig::new("session-token")
            .with_api_host("https://api.test")
            .with_workflow_host("https://api2.test")
    }

    pub fn fake_client(status: u16, body: &str) -> PennsieveClient<FakeBackend> {
        PennsieveClient::with_backend(test_config(), FakeBackend::new(status, body))
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultPennsieveClient::new(test_config()).unwrap();
        assert_eq!(client.config.api_host, "https://api.test");
    }

    #[tokio::test]
    async fn test_execute_returns_error_bodies() {
        let client = fake_client(500, "internal error");
        let url = url::Url::parse("https://api.test/anything").unwrap();

        let body = client.execute(HttpRequest::get(url)).await.unwrap();
        assert_eq!(body, b"internal error");
    }
}
