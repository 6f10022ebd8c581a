#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod downloader;
mod error;
mod installer;

// ============================================================================
// Public API
// ============================================================================

pub use downloader::{Downloader, HttpDownloader};
pub use error::{DownloadError, InstallError};
pub use installer::Installer;
