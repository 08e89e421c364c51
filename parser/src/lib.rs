//! Cairn Parser
//!
//! This crate turns raw session lines into typed values:
//! - Statement preparation (`insert` / `select` keyword prefixes)
//! - Meta-command parsing (`.`-prefixed session control)
//!
//! Both return `DispatchError` for input they do not recognize.

mod meta;
mod stmt;

pub use meta::{is_meta_command, MetaCommand};
pub use stmt::prepare_statement;
