//! Error types for artifact download and install operations.

use thiserror::Error;

/// Errors from the byte-transfer collaborator.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The downloads endpoint answered with a non-success status.
    #[error("Download failed with status {status}: {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error during the transfer.
    #[error("Network error during download: {0}")]
    Network(#[from] reqwest::Error),

    /// Filesystem error while writing the artifact.
    #[error("I/O error while writing artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the top-level install pipeline.
///
/// The public `fetch`/`install` operations collapse these into a boolean;
/// this type is what `try_fetch` preserves for diagnostics.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Resolution against the upstream catalogs failed.
    #[error(transparent)]
    Resolution(#[from] paperjar_api::ApiError),

    /// The transfer failed after a valid URL was constructed.
    #[error(transparent)]
    Download(#[from] DownloadError),
}
