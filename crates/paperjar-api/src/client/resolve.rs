//! Selection: turning a (version, build) request into a confirmed artifact.

use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::models::{ArtifactRequest, ResolvedArtifact};
use crate::url::build_download_url;
use url::Url;

use super::PaperClient;

impl<B: HttpBackend> PaperClient<B> {
    /// Resolve the latest published version and its latest build.
    ///
    /// "Latest" follows the API ordering convention: the last element of
    /// each catalog. An empty catalog is an error, never a null selection.
    pub async fn resolve_latest(&self) -> ApiResult<ResolvedArtifact> {
        let versions = self.list_versions().await?;
        let version = versions.last().cloned().ok_or_else(|| ApiError::EmptyCatalog {
            scope: "versions".to_string(),
        })?;

        let builds = self.list_builds(&version).await?;
        let build = builds.last().cloned().ok_or_else(|| ApiError::EmptyCatalog {
            scope: format!("builds for {version}"),
        })?;

        Ok(ResolvedArtifact::new(version, build))
    }

    /// Resolve a caller-supplied request against the published catalogs.
    ///
    /// With `force` set the request is trusted verbatim and no catalog
    /// query is issued. Otherwise the version is matched case-insensitively
    /// first (a miss short-circuits before any builds query), then the
    /// build. The resolved artifact carries the catalog's exact casing,
    /// since the download URL is case-sensitive.
    ///
    /// Matching stops at the first case-insensitive hit. Catalogs are
    /// assumed to contain no duplicate entries differing only by case;
    /// behavior is undefined if the upstream ever violates that.
    pub async fn resolve(&self, request: &ArtifactRequest) -> ApiResult<ResolvedArtifact> {
        if request.force {
            return Ok(ResolvedArtifact::new(
                request.version.clone(),
                request.build.clone(),
            ));
        }

        let versions = self.list_versions().await?;
        let version = versions
            .iter()
            .find(|v| v.eq_ignore_ascii_case(&request.version))
            .cloned()
            .ok_or_else(|| ApiError::VersionNotFound {
                version: request.version.clone(),
            })?;

        let builds = self.list_builds(&version).await?;
        let build = builds
            .iter()
            .find(|b| b.eq_ignore_ascii_case(&request.build))
            .cloned()
            .ok_or_else(|| ApiError::BuildNotFound {
                version: version.clone(),
                build: request.build.clone(),
            })?;

        Ok(ResolvedArtifact::new(version, build))
    }

    /// The download URL for a resolved artifact.
    ///
    /// Deterministic given the artifact and the configured base URL:
    /// `{base}/versions/{version}/builds/{build}/downloads/paper-{version}-{build}.jar`.
    pub fn download_url(&self, artifact: &ResolvedArtifact) -> Url {
        build_download_url(&self.config, artifact)
    }
}
