//! Common error types for Cairn.

use thiserror::Error;

/// A line the session could not dispatch.
///
/// Both dispatch paths reject input through this one type, so the session
/// reports them through a single function. The `Display` text is exactly what
/// the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Meta-command literal not known to the router.
    #[error("Unrecognized command '{input}'.")]
    UnrecognizedCommand { input: String },

    /// Line starts with neither statement keyword.
    #[error("Unrecognized keyword at start of '{input}'.")]
    UnrecognizedStatement { input: String },
}

impl DispatchError {
    pub fn unrecognized_command(input: impl Into<String>) -> Self {
        Self::UnrecognizedCommand {
            input: input.into(),
        }
    }

    pub fn unrecognized_statement(input: impl Into<String>) -> Self {
        Self::UnrecognizedStatement {
            input: input.into(),
        }
    }

    /// The raw line that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Self::UnrecognizedCommand { input } | Self::UnrecognizedStatement { input } => input,
        }
    }
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
