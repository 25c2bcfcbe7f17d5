//! Identifier source port.

use crate::task::domain::{TaskDomainError, TaskId};

/// Source of fresh task identifiers.
///
/// Each call returns an identifier strictly greater than every identifier
/// the same instance returned before. Uniqueness only holds per instance:
/// every factory feeding one repository must share a single generator.
/// Feeding a repository from two independent generators is a caller error
/// the repository does not detect.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdsExhausted`] once no greater identifier
    /// is left to issue.
    fn next_id(&self) -> Result<TaskId, TaskDomainError>;
}
