//! Settings management for sqlquill.
//!
//! Model, dialect and temperature defaults live in a TOML file in the
//! platform config directory. Settings are loaded once, merged with CLI
//! overrides and threaded into the request as an immutable value. The access
//! token is never stored here.

use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::llm::types::{DEFAULT_DIALECT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Persisted generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Model identifier on the Hugging Face Hub.
    #[serde(default = "default_model")]
    pub model: String,

    /// Target SQL dialect (e.g. "PostgreSQL", "MySQL", "SQLite").
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Sampling temperature in [0, 1].
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_dialect() -> String {
    DEFAULT_DIALECT.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            dialect: default_dialect(),
            temperature: default_temperature(),
        }
    }
}

impl Settings {
    /// Returns the default settings file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sqlquill")
            .join("config.toml")
    }

    /// Loads settings from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| QuillError::config(format!("Failed to read settings file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses settings from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            QuillError::config(format!("Settings error in {}:\n  {}", path.display(), e))
        })
    }

    /// Saves settings to a TOML file, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                QuillError::config(format!("Failed to create settings directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| QuillError::config(format!("Failed to serialize settings: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| QuillError::config(format!("Failed to write settings file: {e}")))
    }
}
