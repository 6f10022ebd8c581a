//! Internal error types for PaperMC API operations.
//!
//! The taxonomy keeps transport failures, malformed responses, and
//! catalog misses distinct so callers can tell "the API was unreachable"
//! apart from "the value you asked for does not exist".

use thiserror::Error;

/// Result type alias for PaperMC API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to PaperMC downloads API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("PaperMC API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from PaperMC API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The requested version has no match in the published catalog.
    #[error("Version '{version}' not found in the PaperMC version catalog")]
    VersionNotFound {
        /// The version that was requested
        version: String,
    },

    /// The requested build has no match in the version's build catalog.
    #[error("Build '{build}' not found for PaperMC version '{version}'")]
    BuildNotFound {
        /// The catalog-cased version that was queried
        version: String,
        /// The build that was requested
        build: String,
    },

    /// The upstream catalog was empty when a latest pick was required.
    #[error("PaperMC API returned an empty {scope} catalog")]
    EmptyCatalog {
        /// Which catalog was empty (e.g. "versions", "builds for 1.20.1")
        scope: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ApiError::ApiRequestFailed {
            status: 404,
            url: "https://papermc.io/api/v2/projects/paper".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("papermc.io"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = ApiError::InvalidResponse {
            message: "missing 'versions' array".to_string(),
        };
        assert!(error.to_string().contains("missing 'versions' array"));
    }

    #[test]
    fn test_version_not_found_error_message() {
        let error = ApiError::VersionNotFound {
            version: "9.9.9".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("9.9.9"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_build_not_found_error_message() {
        let error = ApiError::BuildNotFound {
            version: "1.20.1".to_string(),
            build: "99999".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("99999"));
        assert!(msg.contains("1.20.1"));
    }

    #[test]
    fn test_empty_catalog_error_message() {
        let error = ApiError::EmptyCatalog {
            scope: "builds for 1.20.1".to_string(),
        };
        assert!(error.to_string().contains("empty builds for 1.20.1 catalog"));
    }
}
