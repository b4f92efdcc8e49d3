//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The repository owner or name is empty or malformed.
    #[error("invalid repository '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// The issue number is invalid.
    #[error("invalid issue number {0}, expected a positive integer")]
    InvalidIssueNumber(u64),

    /// A column name is empty after trimming.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// The board defines no columns.
    #[error("board must define at least one column")]
    EmptyBoard,

    /// Two columns share the same name.
    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),

    /// Two columns claim the same board-managed label.
    #[error("label '{label}' is configured on both '{first}' and '{second}'")]
    DuplicateColumnLabel {
        /// The shared label.
        label: String,
        /// Column that declared the label first.
        first: String,
        /// Column that declared the label again.
        second: String,
    },

    /// The column state name is not recognised.
    #[error("unknown column state: {0}")]
    UnknownColumnState(String),
}
