//! Install pipeline: resolve an artifact, then fetch it to a directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use paperjar_api::{
    ArtifactRequest, DefaultPaperClient, PaperClientConfig, PaperClientPort, ResolvedArtifact,
};
use tracing::{info, warn};

use crate::downloader::{Downloader, HttpDownloader};
use crate::error::InstallError;

/// Installs PaperMC artifacts by composing the resolver with a downloader.
///
/// Each operation is a linear resolve-then-fetch pipeline; there is no
/// state carried between calls.
pub struct Installer {
    client: Arc<dyn PaperClientPort>,
    downloader: Arc<dyn Downloader>,
}

impl Installer {
    /// Create an installer from explicit collaborators.
    pub fn new(client: Arc<dyn PaperClientPort>, downloader: Arc<dyn Downloader>) -> Self {
        Self { client, downloader }
    }

    /// Create an installer with the default client and downloader.
    #[must_use]
    pub fn with_defaults(config: &PaperClientConfig) -> Self {
        Self::new(
            Arc::new(DefaultPaperClient::new(config)),
            Arc::new(HttpDownloader::new()),
        )
    }

    /// Fetch a resolved artifact into `dest_dir`, preserving failure detail.
    ///
    /// Returns the path of the written file. The file belongs to the
    /// caller once this returns.
    pub async fn try_fetch(
        &self,
        artifact: &ResolvedArtifact,
        dest_dir: &Path,
    ) -> Result<PathBuf, InstallError> {
        let url = self.client.download_url(artifact);
        let dest = dest_dir.join(artifact.file_name());

        self.downloader.download_to_file(&url, &dest).await?;
        info!(artifact = %artifact, path = %dest.display(), "artifact installed");

        Ok(dest)
    }

    /// Fetch a resolved artifact into `dest_dir`.
    ///
    /// Single success/fail boundary for the install pipeline: every
    /// downstream failure collapses to `false` here, with the cause
    /// logged rather than discarded. Use [`Installer::try_fetch`] when the
    /// structured error is needed.
    pub async fn fetch(&self, artifact: &ResolvedArtifact, dest_dir: &Path) -> bool {
        match self.try_fetch(artifact, dest_dir).await {
            Ok(_) => true,
            Err(e) => {
                warn!(artifact = %artifact, error = %e, "artifact fetch failed");
                false
            }
        }
    }

    /// Resolve `version`/`build` (verbatim if `force`) and fetch it.
    pub async fn install(
        &self,
        version: &str,
        build: &str,
        force: bool,
        dest_dir: &Path,
    ) -> bool {
        let request = ArtifactRequest {
            version: version.to_string(),
            build: build.to_string(),
            force,
        };

        match self.client.resolve(&request).await {
            Ok(artifact) => self.fetch(&artifact, dest_dir).await,
            Err(e) => {
                warn!(version, build, error = %e, "resolution failed");
                false
            }
        }
    }

    /// Resolve the latest version and build, then fetch it.
    pub async fn install_latest(&self, dest_dir: &Path) -> bool {
        match self.client.resolve_latest().await {
            Ok(artifact) => self.fetch(&artifact, dest_dir).await,
            Err(e) => {
                warn!(error = %e, "latest resolution failed");
                false
            }
        }
    }
}
