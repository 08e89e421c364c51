//! Dispatch outcomes.

use crate::{DispatchResult, Statement};

/// Result of routing a recognized meta-command.
///
/// An unrecognized meta-command is a `DispatchError::UnrecognizedCommand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommandOutcome {
    /// The command ran; the session keeps going.
    Success,
    /// The session should shut down.
    Exit,
}

/// Result of preparing one statement line.
pub type PrepareResult = DispatchResult<Statement>;
