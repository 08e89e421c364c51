//! Cairn Core Types
//!
//! This crate provides the foundational types shared by every Cairn component:
//! - Statements (the `Statement` enum and its per-kind payloads)
//! - Dispatch outcomes (meta-command and statement preparation results)
//! - The common rejection error reported back to the user
//! - Session protocol literals (prompt, placeholders, echo)

mod error;
pub mod messages;
mod outcome;
mod statement;

pub use error::*;
pub use outcome::*;
pub use statement::*;
