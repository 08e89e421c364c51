//! Meta-command routing.

use cairn_core::{DispatchResult, MetaCommandOutcome};
use cairn_parser::MetaCommand;
use tracing::debug;

/// Route a `.`-prefixed line to its handler.
///
/// `.exit` yields `MetaCommandOutcome::Exit`; the caller decides how to shut
/// down. Unknown commands come back as `DispatchError::UnrecognizedCommand`.
pub fn route(line: &str) -> DispatchResult<MetaCommandOutcome> {
    let command = MetaCommand::parse(line)?;
    debug!(command = command.literal(), "meta-command");

    match command {
        MetaCommand::Exit => Ok(MetaCommandOutcome::Exit),
    }
}
