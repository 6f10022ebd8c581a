//! Internal configuration and domain types for the PaperMC client.

use std::time::Duration;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the PaperMC client.
#[derive(Debug, Clone)]
pub struct PaperConfig {
    /// Base URL for the project endpoint
    /// (default: <https://papermc.io/api/v2/projects/paper>)
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://papermc.io/api/v2/projects/paper")
                .expect("default PaperMC API URL is valid"),
            user_agent: concat!("paperjar-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Artifact Request
// ============================================================================

/// A caller-supplied (version, build) request.
///
/// With `force` set, resolution skips catalog validation entirely and
/// trusts both identifiers verbatim. The caller asserts correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// Requested game version (matched case-insensitively)
    pub version: String,
    /// Requested build identifier (matched case-insensitively)
    pub build: String,
    /// Skip catalog validation and trust the values verbatim
    pub force: bool,
}

impl ArtifactRequest {
    /// Create a request that will be validated against the catalogs.
    pub fn new(version: impl Into<String>, build: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build: build.into(),
            force: false,
        }
    }

    /// Create a request that bypasses catalog validation.
    pub fn forced(version: impl Into<String>, build: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build: build.into(),
            force: true,
        }
    }
}

// ============================================================================
// Resolved Artifact
// ============================================================================

/// A confirmed (version, build) pair usable for download URL construction.
///
/// Only constructed from catalog-returned values (exact upstream casing) or
/// from a forced request. Never built from an unvalidated request otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedArtifact {
    /// Catalog-cased game version
    pub version: String,
    /// Catalog-cased build identifier
    pub build: String,
}

impl ResolvedArtifact {
    /// Create a resolved artifact from confirmed values.
    pub fn new(version: impl Into<String>, build: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build: build.into(),
        }
    }

    /// The artifact filename the downloads endpoint serves.
    ///
    /// Fixed upstream convention; the download URL only resolves if this
    /// pattern is reproduced exactly.
    pub fn file_name(&self) -> String {
        format!("paper-{}-{}.jar", self.version, self.build)
    }
}

impl std::fmt::Display for ResolvedArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} build {}", self.version, self.build)
    }
}
