//! Catalog queries: supported versions and per-version builds.

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::parsing::{parse_builds, parse_versions};
use crate::url::{build_project_url, build_version_url};

use super::PaperClient;

impl<B: HttpBackend> PaperClient<B> {
    /// List the versions currently published for the project.
    ///
    /// Order is API-defined with the newest version last. Fetched fresh on
    /// every call; nothing is cached.
    pub async fn list_versions(&self) -> ApiResult<Vec<String>> {
        let url = build_project_url(&self.config);
        let json: serde_json::Value = self.backend.get_json(&url).await?;
        parse_versions(&json)
    }

    /// List the builds published for one version, newest last.
    ///
    /// The version is not pre-validated against the catalog; an unknown
    /// version surfaces as whatever error the upstream returns for the
    /// version endpoint.
    pub async fn list_builds(&self, version: &str) -> ApiResult<Vec<String>> {
        let url = build_version_url(&self.config, version);
        let json: serde_json::Value = self.backend.get_json(&url).await?;
        parse_builds(&json)
    }
}
