//! HTTP backend abstraction for the PaperMC downloads API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use crate::error::{ApiError, ApiResult};
use crate::models::PaperConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `PaperClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors. Retry policy lives here, at the transport layer;
/// the resolver above never re-issues a catalog query on its own.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PaperConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        }
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> ApiResult<reqwest::Response> {
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(
                    self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1),
                );
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(ApiError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(ApiError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// A fake HTTP backend that returns canned JSON responses.
    ///
    /// Records every requested URL so tests can assert which catalog
    /// queries were (or were not) issued.
    pub struct FakeBackend {
        responses: Arc<Mutex<HashMap<String, serde_json::Value>>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend with no canned responses.
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(HashMap::new())),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Add a canned response for URLs ending with the given pattern.
        ///
        /// Suffix matching, because the project endpoint URL is a prefix
        /// of every version endpoint URL.
        pub fn with_response(self, url_ends_with: &str, json: serde_json::Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_ends_with.to_string(), json);
            self
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find_response(&self, url: &str) -> Option<serde_json::Value> {
            let responses = self.responses.lock().unwrap();
            for (pattern, response) in responses.iter() {
                if url.ends_with(pattern) {
                    return Some(response.clone());
                }
            }
            None
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clone for FakeBackend {
        fn clone(&self) -> Self {
            Self {
                responses: Arc::clone(&self.responses),
                requests: Arc::clone(&self.requests),
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
            self.requests.lock().unwrap().push(url.to_string());

            let response =
                self.find_response(url.as_str())
                    .ok_or_else(|| ApiError::ApiRequestFailed {
                        status: 404,
                        url: url.to_string(),
                    })?;

            serde_json::from_value(response).map_err(Into::into)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeBackend;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = PaperConfig::default();
        let backend = ReqwestBackend::new(&config);
        assert_eq!(backend.max_retries, 3);
        assert_eq!(backend.retry_base_delay_ms, 500);
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new()
            .with_response("projects/paper", json!({"versions": ["1.19", "1.20"]}));

        let url = Url::parse("https://papermc.io/api/v2/projects/paper").unwrap();
        let result: serde_json::Value = backend.get_json(&url).await.unwrap();

        assert_eq!(result["versions"][1], "1.20");
    }

    #[tokio::test]
    async fn test_fake_backend_fails_for_unknown_url() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://papermc.io/api/v2/projects/paper").unwrap();

        let result: ApiResult<serde_json::Value> = backend.get_json(&url).await;
        assert!(matches!(
            result,
            Err(ApiError::ApiRequestFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fake_backend_records_requests() {
        let backend = FakeBackend::new().with_response("versions/1.20", json!({"builds": [1]}));

        let url = Url::parse("https://papermc.io/api/v2/projects/paper/versions/1.20").unwrap();
        let _: serde_json::Value = backend.get_json(&url).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].contains("versions/1.20"));
    }
}
