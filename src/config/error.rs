//! Configuration loading errors.

use crate::keymap::KeymapError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format '{0}', expected .toml or .json")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Keymap(#[from] KeymapError),
}
