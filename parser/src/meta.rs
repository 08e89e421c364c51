//! Meta-command parsing.

use cairn_core::messages::{EXIT_COMMAND, META_SENTINEL};
use cairn_core::{DispatchError, DispatchResult};

/// A recognized meta-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// `.exit`
    Exit,
}

impl MetaCommand {
    /// Parse a meta-command line.
    ///
    /// Matching is exact and whole-line: `.exit ` and `.EXIT` are not `.exit`.
    pub fn parse(line: &str) -> DispatchResult<Self> {
        match line {
            EXIT_COMMAND => Ok(MetaCommand::Exit),
            _ => Err(DispatchError::unrecognized_command(line)),
        }
    }

    /// The literal that spells this command.
    pub fn literal(self) -> &'static str {
        match self {
            MetaCommand::Exit => EXIT_COMMAND,
        }
    }
}

/// Returns true if the line should go to the meta-command router.
pub fn is_meta_command(line: &str) -> bool {
    line.starts_with(META_SENTINEL)
}
