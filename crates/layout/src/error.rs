// Chunk: docs/chunks/layout_config - Layout configuration file

//! Errors for the fallible surface of the layout crate.
//!
//! Layout queries never fail: out-of-range arguments are clamped. Only loading
//! a [`LayoutConfig`](crate::LayoutConfig) can go wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read layout config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid layout config: {0}")]
    Invalid(String),
}
