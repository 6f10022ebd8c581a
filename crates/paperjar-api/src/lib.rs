#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultPaperClient is meant to be
// used through the PaperClientPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPaperClient;

// Configuration
pub use config::PaperClientConfig;

// Domain types
pub use models::{ArtifactRequest, ResolvedArtifact};

// Errors
pub use error::{ApiError, ApiResult};

// Port trait for downstream consumers
pub use port::PaperClientPort;
