//! Line sources for the session loop.
//!
//! The interactive binary reads through a rustyline editor with history.
//! Piped input and tests read through `BufferedReader`, which writes the
//! prompt to the session output itself.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::{debug, warn};

use crate::config::ReplConfig;
use crate::error::ReplResult;

/// One read from a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// A line, without its terminator.
    Line(String),
    /// The user pressed Ctrl-C.
    Interrupted,
    /// No more input.
    EndOfInput,
}

/// A source of input lines.
pub trait LineReader {
    /// Show `prompt` and read the next line.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> ReplResult<ReadLine>;

    /// Release the source when the session ends.
    fn close(&mut self) -> ReplResult<()> {
        Ok(())
    }
}

/// Reads lines from any `BufRead`.
#[derive(Debug)]
pub struct BufferedReader<R> {
    input: R,
}

impl<R: BufRead> BufferedReader<R> {
    /// Create a reader over `input`.
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for BufferedReader<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> ReplResult<ReadLine> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadLine::EndOfInput);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_line_ending(&mut line);
        Ok(ReadLine::Line(line))
    }
}

/// Interactive line editor with persistent history.
pub struct EditorReader {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl EditorReader {
    /// Create an editor configured from `config`, loading any saved history.
    pub fn new(config: &ReplConfig) -> ReplResult<Self> {
        let rl_config = Config::builder()
            .auto_add_history(true)
            .max_history_size(config.history_size)?
            .build();
        let mut editor = DefaultEditor::with_config(rl_config)?;

        let history_file = config.history_path();
        if let Some(ref path) = history_file {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    warn!("Failed to load history from {}: {}", path.display(), e);
                }
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> ReplResult<ReadLine> {
        out.flush()?;

        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadLine::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadLine::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) -> ReplResult<()> {
        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match self.editor.save_history(path) {
                Ok(()) => debug!("Saved history to {}", path.display()),
                Err(e) => warn!("Failed to save history to {}: {}", path.display(), e),
            }
        }
        Ok(())
    }
}

/// Strip one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
