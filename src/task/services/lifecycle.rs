//! Service layer for adding, editing, re-prioritising and removing tasks.

use crate::task::{
    domain::{Priority, Task, TaskDomainError, TaskId},
    ports::{IdGenerator, TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::TaskFactory;

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Writing rendered output failed.
    #[error("failed to write task output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Task list orchestration service.
///
/// Operations addressing a task by identifier silently do nothing when no
/// such task is stored.
pub struct TaskListService<R, G>
where
    R: TaskRepository + ?Sized,
    G: IdGenerator + ?Sized,
{
    repository: Arc<R>,
    factory: TaskFactory<G>,
}

impl<R, G> TaskListService<R, G>
where
    R: TaskRepository + ?Sized,
    G: IdGenerator + ?Sized,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, factory: TaskFactory<G>) -> Self {
        Self {
            repository,
            factory,
        }
    }

    /// Creates a task with the lowest priority and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Domain`] when no identifier is left to
    /// assign, or [`TaskListError::Repository`] when the repository rejects
    /// the task.
    pub fn add_task(&self, text: impl Into<String>) -> TaskListResult<Task> {
        let task = self.factory.create(text, Priority::lowest())?;
        self.repository.add(&task)?;
        debug!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Removes the task with the given identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage access fails.
    pub fn remove_task(&self, id: TaskId) -> TaskListResult<()> {
        self.repository.remove_by_id(id)?;
        debug!(task_id = %id, "task removed");
        Ok(())
    }

    /// Replaces the text of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage access fails.
    pub fn edit_task(&self, id: TaskId, text: impl Into<String>) -> TaskListResult<()> {
        let new_text: String = text.into();
        self.modify(id, "edit", move |task| task.set_text(new_text))
    }

    /// Raises the priority of the task with the given identifier one step.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage access fails.
    pub fn raise_priority(&self, id: TaskId) -> TaskListResult<()> {
        self.modify(id, "raise priority", Task::raise_priority)
    }

    /// Lowers the priority of the task with the given identifier one step.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage access fails.
    pub fn lower_priority(&self, id: TaskId) -> TaskListResult<()> {
        self.modify(id, "lower priority", Task::lower_priority)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage access fails.
    pub fn find_task(&self, id: TaskId) -> TaskListResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns every task, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage access fails.
    pub fn list_tasks(&self) -> TaskListResult<Vec<Task>> {
        Ok(self.repository.list()?)
    }

    fn modify(
        &self,
        id: TaskId,
        operation: &'static str,
        change: impl FnOnce(&mut Task),
    ) -> TaskListResult<()> {
        let Some(mut task) = self.repository.find_by_id(id)? else {
            debug!(task_id = %id, operation, "task not found, skipping");
            return Ok(());
        };
        change(&mut task);
        self.repository.update(&task)?;
        debug!(task_id = %id, operation, priority = %task.priority(), "task updated");
        Ok(())
    }
}

impl<R, G> Clone for TaskListService<R, G>
where
    R: TaskRepository + ?Sized,
    G: IdGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            factory: self.factory.clone(),
        }
    }
}
