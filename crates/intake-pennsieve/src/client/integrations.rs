//! Integration lookup.

use super::PennsieveClient;
use crate::error::PennsieveResult;
use crate::http::{HttpBackend, HttpRequest};
use crate::url::integration_url;

impl<B: HttpBackend> PennsieveClient<B> {
    /// Fetch the raw integration record from the workflow host.
    pub async fn get_integration(&self, integration_id: &str) -> PennsieveResult<Vec<u8>> {
        let url = integration_url(&self.config.workflow_host, integration_id)?;
        let request = HttpRequest::get(url)
            .header("accept", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.session_token),
            );

        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::fake_client;
    use crate::error::PennsieveError;
    use crate::http::HttpMethod;

    #[tokio::test]
    async fn test_get_integration_request_shape() {
        let client = fake_client(200, r#"{"uuid": "abc"}"#);

        let body = client.get_integration("abc").await.unwrap();
        assert_eq!(body, br#"{"uuid": "abc"}"#);

        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.as_str(), "https://api2.test/integrations/abc");
        assert_eq!(request.header_value("accept"), Some("application/json"));
        assert_eq!(
            request.header_value("authorization"),
            Some("Bearer session-token")
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_get_integration_returns_non_success_body() {
        let client = fake_client(404, r#"{"message": "integration not found"}"#);
        let body = client.get_integration("missing").await.unwrap();
        assert_eq!(body, br#"{"message": "integration not found"}"#);
    }

    #[tokio::test]
    async fn test_get_integration_invalid_host() {
        let mut client = fake_client(200, "{}");
        client.config = client.config.with_workflow_host("");

        let result = client.get_integration("abc").await;
        assert!(matches!(result, Err(PennsieveError::InvalidHost { .. })));
        assert!(client.backend.requests().is_empty());
    }
}
