//! Repository port for task storage, lookup and listing.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Lookups return owned snapshots. A caller that changes a task persists
/// the change with [`TaskRepository::update`].
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Appends a task to the collection.
    ///
    /// Identifiers are not checked for duplicates. Adding a task whose
    /// identifier is already stored keeps both entries; lookups then
    /// resolve to the first one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage access fails.
    fn add(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Writes back the text and priority of the first stored task with the
    /// same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no stored task has the
    /// identifier.
    fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes every task with the given identifier.
    ///
    /// Removing an unknown identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage access fails.
    fn remove_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds the first task with the given identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage access fails.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task, highest priority first.
    ///
    /// Tasks of equal priority keep their storage order. The returned vector
    /// is a fresh copy on every call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage access fails.
    fn list(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
