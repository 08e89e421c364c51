//! Statement executor.

use std::io::Write;

use cairn_core::messages::{INSERT_PLACEHOLDER, SELECT_PLACEHOLDER};
use cairn_core::{InsertStmt, SelectStmt, Statement};
use tracing::debug;

use crate::error::{ExecError, ExecResult};

/// Runs prepared statements.
///
/// Output goes to the writer the session hands in; the session writes its own
/// echo line afterwards.
pub trait Executor {
    /// Execute one statement.
    fn execute(&mut self, stmt: Statement, out: &mut dyn Write) -> ExecResult<()>;

    /// Release resources before the session ends.
    ///
    /// Called once, on `.exit` or end of input.
    fn shutdown(&mut self) -> ExecResult<()> {
        Ok(())
    }
}

/// Executor that performs no data access and writes a placeholder line.
#[derive(Debug, Default)]
pub struct PlaceholderExecutor {
    executed: u64,
    shut_down: bool,
}

impl PlaceholderExecutor {
    /// Create a new executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements executed so far.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Returns true once `shutdown` has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    fn execute_insert(&mut self, _stmt: InsertStmt, out: &mut dyn Write) -> ExecResult<()> {
        writeln!(out, "{}", INSERT_PLACEHOLDER)?;
        Ok(())
    }

    fn execute_select(&mut self, _stmt: SelectStmt, out: &mut dyn Write) -> ExecResult<()> {
        writeln!(out, "{}", SELECT_PLACEHOLDER)?;
        Ok(())
    }
}

impl Executor for PlaceholderExecutor {
    fn execute(&mut self, stmt: Statement, out: &mut dyn Write) -> ExecResult<()> {
        if self.shut_down {
            return Err(ExecError::ShutDown);
        }
        debug!(kind = %stmt.kind(), "executing statement");

        match stmt {
            Statement::Insert(insert) => self.execute_insert(insert, out)?,
            Statement::Select(select) => self.execute_select(select, out)?,
        }
        self.executed += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> ExecResult<()> {
        if !self.shut_down {
            debug!(executed = self.executed, "executor shut down");
            self.shut_down = true;
        }
        Ok(())
    }
}
