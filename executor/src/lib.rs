//! Cairn Statement Executor
//!
//! This crate is the seam where a storage engine attaches:
//! - `Executor`: the trait the session drives for every prepared statement
//! - `PlaceholderExecutor`: writes a placeholder line per statement kind
//! - Error types for execution and shutdown

mod error;
mod executor;

pub use error::*;
pub use executor::{Executor, PlaceholderExecutor};
