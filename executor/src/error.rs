//! Executor error types.

use thiserror::Error;

/// Result type for executor operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// Errors that can occur while executing a statement.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to write statement output: {0}")]
    Output(#[from] std::io::Error),

    #[error("executor already shut down")]
    ShutDown,
}
