//! Core REPL state and execution.

use std::io::Write;

use cairn_core::messages::{ECHO_PREFIX, PROMPT};
use cairn_core::{DispatchError, MetaCommandOutcome};
use cairn_executor::Executor;
use cairn_parser::{is_meta_command, prepare_statement};
use tracing::{debug, info};

use crate::error::ReplResult;
use crate::input::{LineReader, ReadLine};
use crate::meta::route;

/// What the loop does after dispatching one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `.exit`.
    Exit,
    /// The line source ran dry.
    EndOfInput,
}

/// REPL state.
pub struct Repl<R, E, W> {
    reader: R,
    executor: E,
    out: W,
    report_unrecognized_statements: bool,
}

impl<R: LineReader, E: Executor, W: Write> Repl<R, E, W> {
    /// Create a new REPL instance.
    pub fn new(reader: R, executor: E, out: W) -> Self {
        Self {
            reader,
            executor,
            out,
            report_unrecognized_statements: false,
        }
    }

    /// Print a message for lines that are neither meta-commands nor statements.
    pub fn report_unrecognized_statements(mut self, enabled: bool) -> Self {
        self.report_unrecognized_statements = enabled;
        self
    }

    /// Get the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Consume the REPL, returning the executor and the output stream.
    pub fn into_parts(self) -> (E, W) {
        (self.executor, self.out)
    }

    /// Run until `.exit` or end of input, then shut down.
    pub fn run(&mut self) -> ReplResult<SessionEnd> {
        info!("session started");

        let end = loop {
            match self.reader.read_line(PROMPT, &mut self.out)? {
                ReadLine::Line(line) => {
                    if self.dispatch(&line)? == Flow::Exit {
                        break SessionEnd::Exit;
                    }
                }
                ReadLine::Interrupted => {
                    debug!("input interrupted");
                }
                ReadLine::EndOfInput => break SessionEnd::EndOfInput,
            }
        };

        self.shutdown()?;
        info!(?end, "session ended");
        Ok(end)
    }

    /// Dispatch a single line.
    pub fn dispatch(&mut self, line: &str) -> ReplResult<Flow> {
        if is_meta_command(line) {
            return match route(line) {
                Ok(MetaCommandOutcome::Exit) => Ok(Flow::Exit),
                Ok(MetaCommandOutcome::Success) => Ok(Flow::Continue),
                Err(e) => {
                    self.report(&e)?;
                    Ok(Flow::Continue)
                }
            };
        }

        match prepare_statement(line) {
            Ok(stmt) => {
                debug!(kind = %stmt.kind(), "prepared statement");
                self.executor.execute(stmt, &mut self.out)?;
                writeln!(self.out, "{}{}", ECHO_PREFIX, line)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    /// Report rejected input to the user.
    ///
    /// Unrecognized commands are always printed. Unrecognized statements are
    /// printed only when enabled.
    fn report(&mut self, err: &DispatchError) -> ReplResult<()> {
        let visible = match err {
            DispatchError::UnrecognizedCommand { .. } => true,
            DispatchError::UnrecognizedStatement { .. } => self.report_unrecognized_statements,
        };

        if visible {
            writeln!(self.out, "{}", err)?;
        } else {
            debug!(input = err.input(), "ignoring unrecognized statement");
        }
        Ok(())
    }

    fn shutdown(&mut self) -> ReplResult<()> {
        self.executor.shutdown()?;
        self.reader.close()?;
        self.out.flush()?;
        Ok(())
    }
}
