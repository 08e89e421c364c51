//! Cairn REPL library - the interactive front end of the Cairn database.
//!
//! It is split into modules for better maintainability:
//!
//! - `repl`: Session loop (prompt, dispatch, shutdown)
//! - `meta`: Meta-command routing
//! - `input`: Line sources (rustyline editor, buffered reader)
//! - `config`: TOML configuration
//! - `error`: REPL error types

mod config;
mod error;
mod input;
mod meta;
mod repl;

pub use config::ReplConfig;
pub use error::{ReplError, ReplResult};
pub use input::{BufferedReader, EditorReader, LineReader, ReadLine};
pub use meta::route;
pub use repl::{Flow, Repl, SessionEnd};
