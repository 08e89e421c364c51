//! Session protocol literals.
//!
//! These constants are the exact text a session writes, shared by the
//! executor and the REPL so both agree with the tests.

/// Prompt written before every line. No trailing newline.
pub const PROMPT: &str = "db > ";

/// First character of every meta-command.
pub const META_SENTINEL: char = '.';

/// Meta-command that ends the session.
pub const EXIT_COMMAND: &str = ".exit";

/// Placeholder written for an INSERT statement.
pub const INSERT_PLACEHOLDER: &str = "This is where we would do an insert.";

/// Placeholder written for a SELECT statement.
pub const SELECT_PLACEHOLDER: &str = "This is where we would do a select.";

/// Prefix of the echo line written after every executed statement.
pub const ECHO_PREFIX: &str = "SQL command: ";
