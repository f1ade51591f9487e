//! Errors raised while reading a catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error.
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),
}
