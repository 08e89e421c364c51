//! REPL error types.

use std::path::PathBuf;

use cairn_executor::ExecError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Errors that end a session abnormally.
///
/// Rejected input is not an error here; it is reported and the session goes on.
#[derive(Debug, Error)]
pub enum ReplError {
    /// Session input or output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor failure.
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),

    /// Executor failure.
    #[error("execution error: {0}")]
    Exec(#[from] ExecError),

    /// Configuration file could not be parsed.
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl ReplError {
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for REPL operations.
pub type ReplResult<T> = Result<T, ReplError>;
