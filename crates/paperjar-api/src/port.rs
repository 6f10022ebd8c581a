//! Port trait for consumers of the PaperMC client.
//!
//! Downstream crates depend on this object-safe trait rather than on the
//! generic `PaperClient`, so installers and tooling can be tested with
//! substitute implementations.

use async_trait::async_trait;
use url::Url;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{ArtifactRequest, ResolvedArtifact};
use crate::client::PaperClient;

/// Port trait for PaperMC catalog and resolution operations.
///
/// # Design
///
/// - Every method is a self-contained request/response cycle
/// - Returns `ApiError` for all failures; "no data" is an error, not an
///   empty list
/// - `download_url` is pure given a resolved artifact
#[async_trait]
pub trait PaperClientPort: Send + Sync {
    /// List the published versions, newest last.
    async fn list_versions(&self) -> ApiResult<Vec<String>>;

    /// List the builds published for one version, newest last.
    async fn list_builds(&self, version: &str) -> ApiResult<Vec<String>>;

    /// Resolve a request against the catalogs (or trust it, with force).
    async fn resolve(&self, request: &ArtifactRequest) -> ApiResult<ResolvedArtifact>;

    /// Resolve the latest version and its latest build.
    async fn resolve_latest(&self) -> ApiResult<ResolvedArtifact>;

    /// The download URL for a resolved artifact.
    fn download_url(&self, artifact: &ResolvedArtifact) -> Url;
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> PaperClientPort for PaperClient<B> {
    async fn list_versions(&self) -> ApiResult<Vec<String>> {
        Self::list_versions(self).await
    }

    async fn list_builds(&self, version: &str) -> ApiResult<Vec<String>> {
        Self::list_builds(self, version).await
    }

    async fn resolve(&self, request: &ArtifactRequest) -> ApiResult<ResolvedArtifact> {
        Self::resolve(self, request).await
    }

    async fn resolve_latest(&self) -> ApiResult<ResolvedArtifact> {
        Self::resolve_latest(self).await
    }

    fn download_url(&self, artifact: &ResolvedArtifact) -> Url {
        Self::download_url(self, artifact)
    }
}
