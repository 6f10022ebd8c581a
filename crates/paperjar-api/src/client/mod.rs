//! PaperMC client for querying catalogs and resolving artifacts.
//!
//! This module provides the main client interface for interacting with
//! the PaperMC downloads API.

mod catalog;
mod resolve;

use crate::config::PaperClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::PaperConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PaperMC client using the reqwest HTTP backend.
pub type DefaultPaperClient = PaperClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the PaperMC downloads API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultPaperClient` for production code. The generic parameter `B`
/// is an implementation detail - external code should not instantiate this
/// directly but use `DefaultPaperClient::new()`.
///
/// The client holds no mutable state; every operation is a self-contained
/// request/response cycle, so a single instance may be shared across tasks.
pub struct PaperClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: PaperConfig,
}

impl DefaultPaperClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &PaperClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&PaperClientConfig::default())
    }

    fn to_internal_config(config: &PaperClientConfig) -> PaperConfig {
        PaperConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://papermc.io/api/v2/projects/paper")
                    .expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        }
    }
}

impl<B: HttpBackend> PaperClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: PaperConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    pub fn test_config() -> PaperConfig {
        PaperConfig::default()
    }

    #[test]
    fn test_default_client_creation() {
        let config = PaperClientConfig::new();
        let _client = DefaultPaperClient::new(&config);
    }

    #[test]
    fn test_internal_config_falls_back_on_bad_base_url() {
        let config = PaperClientConfig::new().with_base_url("not a url");
        let internal = DefaultPaperClient::to_internal_config(&config);
        assert_eq!(
            internal.base_url.as_str(),
            "https://papermc.io/api/v2/projects/paper"
        );
    }

    #[test]
    fn test_client_with_fake_backend() {
        let backend =
            FakeBackend::new().with_response("paper", json!({"versions": ["1.20.1"]}));
        let _client = PaperClient::with_backend(test_config(), backend);
    }
}
