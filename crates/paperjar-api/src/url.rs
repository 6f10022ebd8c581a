//! URL construction helpers for the PaperMC downloads API.
//!
//! Pure functions so every API call builds its URL the same way. The
//! download URL in particular is case-sensitive upstream, which is why
//! resolution canonicalizes identifiers before these run.

use crate::models::{PaperConfig, ResolvedArtifact};
use url::Url;

/// Build the project endpoint URL (lists the supported versions).
pub fn build_project_url(config: &PaperConfig) -> Url {
    config.base_url.clone()
}

/// Build the version endpoint URL (lists the builds for one version).
pub fn build_version_url(config: &PaperConfig, version: &str) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/versions/{version}"));

    url
}

/// Build the artifact download URL for a resolved (version, build) pair.
pub fn build_download_url(config: &PaperConfig, artifact: &ResolvedArtifact) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!(
        "{base_path}/versions/{}/builds/{}/downloads/{}",
        artifact.version,
        artifact.build,
        artifact.file_name()
    ));

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> PaperConfig {
        PaperConfig::default()
    }

    #[test]
    fn test_build_project_url() {
        let url = build_project_url(&default_config());
        assert_eq!(url.as_str(), "https://papermc.io/api/v2/projects/paper");
    }

    #[test]
    fn test_build_version_url() {
        let url = build_version_url(&default_config(), "1.20.1");
        assert_eq!(
            url.as_str(),
            "https://papermc.io/api/v2/projects/paper/versions/1.20.1"
        );
    }

    #[test]
    fn test_build_version_url_trailing_slash_base() {
        let config = PaperConfig {
            base_url: Url::parse("https://papermc.io/api/v2/projects/paper/").unwrap(),
            ..Default::default()
        };
        let url = build_version_url(&config, "1.20.1");
        assert_eq!(
            url.as_str(),
            "https://papermc.io/api/v2/projects/paper/versions/1.20.1"
        );
    }

    #[test]
    fn test_build_download_url() {
        let artifact = ResolvedArtifact::new("1.20.1", "196");
        let url = build_download_url(&default_config(), &artifact);
        assert_eq!(
            url.as_str(),
            "https://papermc.io/api/v2/projects/paper/versions/1.20.1/builds/196/downloads/paper-1.20.1-196.jar"
        );
    }

    #[test]
    fn test_build_download_url_custom_base() {
        let config = PaperConfig {
            base_url: Url::parse("http://localhost:8080/v2/projects/paper").unwrap(),
            ..Default::default()
        };
        let artifact = ResolvedArtifact::new("1.20", "101");
        let url = build_download_url(&config, &artifact);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v2/projects/paper/versions/1.20/builds/101/downloads/paper-1.20-101.jar"
        );
    }
}
