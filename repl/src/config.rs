//! Configuration file support for the REPL.
//!
//! Loads and saves REPL configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReplError, ReplResult};

/// REPL configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// History file path. Falls back to the platform data directory.
    #[serde(default)]
    pub history_file: Option<PathBuf>,

    /// Maximum history size.
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Whether the interactive editor loads and saves history.
    #[serde(default = "default_true")]
    pub save_history: bool,

    /// Print a message for lines that are not statements.
    #[serde(default)]
    pub report_unrecognized_statements: bool,
}

fn default_history_size() -> usize {
    1000
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_size: default_history_size(),
            save_history: true,
            report_unrecognized_statements: false,
        }
    }
}

impl ReplConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: &Path) -> ReplResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ReplError::config_parse(path, e))
    }

    /// Saves configuration to a file.
    pub fn save(&self, path: &Path) -> ReplResult<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads the default configuration file, or defaults if there is none.
    pub fn load_default() -> ReplResult<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the default configuration file path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cairn").join("config.toml"))
    }

    /// The history file to use, if history is enabled.
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.save_history {
            return None;
        }
        self.history_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join("cairn").join("history")))
    }
}
