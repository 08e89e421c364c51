//! Statement preparation.

use cairn_core::{DispatchError, PrepareResult, Statement, StatementKind};

/// Prepare a statement from one input line.
///
/// The line must start with a statement keyword exactly: no case folding and
/// no leading whitespace. Anything after the keyword is ignored for now.
pub fn prepare_statement(line: &str) -> PrepareResult {
    StatementKind::ALL
        .into_iter()
        .find(|kind| line.starts_with(kind.keyword()))
        .map(Statement::empty)
        .ok_or_else(|| DispatchError::unrecognized_statement(line))
}
