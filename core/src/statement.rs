//! Statement types.
//!
//! A statement is the typed form of one data-manipulation line. Each kind
//! carries its own payload struct; today those payloads are empty.

use std::fmt;

/// A prepared statement, ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// INSERT statement.
    Insert(InsertStmt),
    /// SELECT statement.
    Select(SelectStmt),
}

/// Payload of an INSERT statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertStmt;

/// Payload of a SELECT statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectStmt;

impl Statement {
    /// Create an empty statement of the given kind.
    pub fn empty(kind: StatementKind) -> Self {
        match kind {
            StatementKind::Insert => Statement::Insert(InsertStmt),
            StatementKind::Select => Statement::Select(SelectStmt),
        }
    }

    /// Get the kind of this statement.
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Insert(_) => StatementKind::Insert,
            Statement::Select(_) => StatementKind::Select,
        }
    }
}

/// The closed set of statement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Insert,
    Select,
}

impl StatementKind {
    /// Every kind, in the order the preparer tries them.
    pub const ALL: [StatementKind; 2] = [StatementKind::Insert, StatementKind::Select];

    /// The literal keyword a line must start with to be this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            StatementKind::Insert => "insert",
            StatementKind::Select => "select",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
