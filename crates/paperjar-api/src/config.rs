//! Public configuration for the PaperMC client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Configuration for the PaperMC downloads API client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use paperjar_api::PaperClientConfig;
/// use std::time::Duration;
///
/// let config = PaperClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct PaperClientConfig {
    /// Base URL for the project endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for PaperClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://papermc.io/api/v2/projects/paper".to_string(),
            user_agent: concat!("paperjar-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl PaperClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the project endpoint.
    ///
    /// Defaults to `https://papermc.io/api/v2/projects/paper`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Retries happen at the transport layer only; the resolver itself
    /// never re-issues a catalog query. Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaperClientConfig::new();
        assert_eq!(config.base_url, "https://papermc.io/api/v2/projects/paper");
        assert!(config.user_agent.contains("paperjar-api"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PaperClientConfig::new()
            .with_base_url("https://custom.api/projects/paper")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60))
            .with_max_retries(5)
            .with_retry_delay(Duration::from_millis(100));

        assert_eq!(config.base_url, "https://custom.api/projects/paper");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_base_delay, Duration::from_millis(100));
    }
}
