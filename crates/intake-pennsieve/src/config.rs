//! Public configuration for the Pennsieve client.

use std::fmt;
use std::time::Duration;

/// User agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("intake-pennsieve/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Pennsieve client.
///
/// Hosts start out empty; a request against an empty host fails with
/// `PennsieveError::InvalidHost`.
///
/// # Example
///
/// ```
/// use intake_pennsieve::PennsieveClientConfig;
/// use std::time::Duration;
///
/// let config = PennsieveClientConfig::new("token")
///     .with_api_host("https://api.pennsieve.net")
///     .with_workflow_host("https://api2.pennsieve.net")
///     .with_optional_timeout(Some(Duration::from_secs(60)));
/// ```
#[derive(Clone)]
pub struct PennsieveClientConfig {
    /// Host serving `/packages/download-manifest`
    pub(crate) api_host: String,
    /// Host serving `/integrations/{id}`
    pub(crate) workflow_host: String,
    /// Session token used for both calls
    pub(crate) session_token: String,
    /// Request timeout; `None` waits indefinitely
    pub(crate) timeout: Option<Duration>,
}

impl fmt::Debug for PennsieveClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PennsieveClientConfig")
            .field("api_host", &self.api_host)
            .field("workflow_host", &self.workflow_host)
            .field("session_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PennsieveClientConfig {
    /// Create a configuration for the given session token.
    #[must_use]
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            api_host: String::new(),
            workflow_host: String::new(),
            session_token: session_token.into(),
            timeout: None,
        }
    }

    /// Set the packages API host.
    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Set the workflow API host used for integrations.
    #[must_use]
    pub fn with_workflow_host(mut self, host: impl Into<String>) -> Self {
        self.workflow_host = host.into();
        self
    }

    /// Set or clear the request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = PennsieveClientConfig::new("tok");
        assert!(config.api_host.is_empty());
        assert!(config.workflow_host.is_empty());
        assert_eq!(config.session_token, "tok");
        assert!(config.timeout.is_none());
        assert!(USER_AGENT.starts_with("intake-pennsieve/"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = PennsieveClientConfig::new("tok")
            .with_api_host("http://localhost:8080")
            .with_workflow_host("http://localhost:8081")
            .with_optional_timeout(Some(Duration::from_secs(5)));

        assert_eq!(config.api_host, "http://localhost:8080");
        assert_eq!(config.workflow_host, "http://localhost:8081");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let config = config.with_optional_timeout(None);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", PennsieveClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
