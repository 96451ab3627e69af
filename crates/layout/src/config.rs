// Chunk: docs/chunks/layout_config - Layout configuration file
//!
//! Tunables for the layout engine.
//!
//! The configuration is a small JSON document. Every field is optional and
//! falls back to its default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "wrap_row_limit": 50000,
//!   "tabular_sample_rows": 1000,
//!   "tabular_margin_chars": 2.0
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Documents with this many rows or more are never wrapped.
pub const DEFAULT_WRAP_ROW_LIMIT: usize = 50_000;

/// Rows sampled from the top of a tabular document to size its columns.
pub const DEFAULT_TABULAR_SAMPLE_ROWS: usize = 1_000;

/// Gap after each tabular column, in standard character widths.
pub const DEFAULT_TABULAR_MARGIN_CHARS: f32 = 2.0;

/// Layout engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Row-count ceiling above which wrapping requests are refused
    pub wrap_row_limit: usize,
    /// Number of leading rows used to compute tabular column widths
    pub tabular_sample_rows: usize,
    /// Space after each tabular column, in standard character widths
    pub tabular_margin_chars: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wrap_row_limit: DEFAULT_WRAP_ROW_LIMIT,
            tabular_sample_rows: DEFAULT_TABULAR_SAMPLE_ROWS,
            tabular_margin_chars: DEFAULT_TABULAR_MARGIN_CHARS,
        }
    }
}

impl LayoutConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded layout config");
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.tabular_margin_chars.is_finite() || self.tabular_margin_chars < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tabular_margin_chars must be a non-negative number, got {}",
                self.tabular_margin_chars
            )));
        }
        Ok(())
    }
}
