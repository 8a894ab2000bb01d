//! Error types for catalog loading and configuration.
//!
//! Match failures are not errors: they surface as `NoMatchReason` on the
//! engine's outcome. Only I/O and parse problems live here.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BoxartError>;

#[derive(Error, Debug)]
pub enum BoxartError {
    #[error("Box art cache unavailable at {path:?}: {source}")]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed cache record at line {line}: expected at least 5 fields, got {fields}")]
    MalformedRecord { line: u64, fields: usize },

    #[error("Cache read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
