//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The priority level is outside the `0..=2` range.
    #[error("invalid priority level {0}, expected 0 (low), 1 (medium) or 2 (high)")]
    InvalidPriority(i64),

    /// The identifier generator has issued its largest identifier.
    #[error("task identifiers exhausted")]
    IdsExhausted,
}

/// Error returned while parsing a priority from its canonical name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
