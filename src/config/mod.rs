//! Session configuration.
//!
//! Loaded from TOML or JSON. Every field is optional; anything left out keeps
//! its default. Key bindings are validated at load time so a session never
//! starts with a conflicting key map.
//!
//! ```toml
//! journal_capacity = 64
//!
//! [keys]
//! multiply = ["*", "x"]
//! clear = ["Escape", "Delete"]
//! ```

pub mod error;

pub use error::ConfigError;

use crate::keymap::{KeyBindings, KeyMap, KeymapError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of transitions a session journal keeps.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Settings for a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Keys for the non-digit inputs
    pub keys: KeyBindings,
    /// Maximum journal length; `0` disables journaling
    pub journal_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Parse a TOML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::config::SessionConfig;
    ///
    /// let config = SessionConfig::from_toml_str(r#"
    ///     journal_capacity = 8
    ///
    ///     [keys]
    ///     clear = ["Delete"]
    /// "#).unwrap();
    ///
    /// assert_eq!(config.journal_capacity, 8);
    /// assert_eq!(config.keys.clear, vec!["Delete"]);
    /// assert_eq!(config.keys.evaluate, vec!["Enter", "="]);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.keymap()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.keymap()?;
        Ok(config)
    }

    /// Load a config file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        tracing::info!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    /// Build the key map described by these bindings.
    pub fn keymap(&self) -> Result<KeyMap, KeymapError> {
        KeyMap::from_bindings(&self.keys)
    }
}
