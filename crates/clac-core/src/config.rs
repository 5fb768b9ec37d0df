#![forbid(unsafe_code)]

//! Calculator configuration loaded from TOML.
//!
//! ```toml
//! # clac.toml
//! [history]
//! enabled = true
//! max_depth = 1000   # optional, history is unbounded without it
//! ```
//!
//! ```rust,ignore
//! let config = ClacConfig::load("clac.toml")?;
//! let clac = Clac::with_config(FloatEngine, &config);
//! ```
//!
//! Missing tables and keys fall back to [`ClacConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::HistoryConfig;

/// Top-level calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClacConfig {
    /// Undo/redo history settings.
    pub history: HistoryConfig,
}

impl ClacConfig {
    /// Parse from a TOML string without validating.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from a TOML file without validating.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse from a TOML file and reject invalid settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate all parameters. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.history.max_depth == Some(0) {
            errors.push("history.max_depth must be > 0".into());
        }
        errors
    }
}

/// Errors from loading a [`ClacConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
