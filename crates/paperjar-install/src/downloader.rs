//! Byte-transfer collaborator for artifact downloads.
//!
//! The installer treats the transfer as a black box behind the
//! `Downloader` trait; connection pooling, TLS, and timeouts are this
//! layer's concern, not the resolver's.

use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::error::DownloadError;

/// Trait for downloaders that can transfer a URL's bytes to a file.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download the resource at `url` into the file at `dest`.
    ///
    /// Creates parent directories as needed. On failure the destination
    /// file may exist in a partial state; ownership of cleanup belongs to
    /// the caller.
    async fn download_to_file(&self, url: &Url, dest: &Path) -> Result<(), DownloadError>;
}

/// Production downloader streaming the response body to disk via reqwest.
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    /// Create a new downloader with its own HTTP client.
    ///
    /// No overall request timeout is set: artifact downloads can
    /// legitimately take longer than any fixed API timeout.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("paperjar-install/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download_to_file(&self, url: &Url, dest: &Path) -> Result<(), DownloadError> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
        }

        file.flush().await?;
        debug!(url = %url, bytes = downloaded, "download complete");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn Downloader>) {}

    #[test]
    fn test_http_downloader_creation() {
        let _downloader = HttpDownloader::new();
    }
}
