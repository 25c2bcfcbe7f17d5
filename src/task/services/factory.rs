//! Task construction with freshly assigned identifiers.

use std::sync::Arc;

use crate::task::{
    domain::{Priority, Task, TaskDomainError},
    ports::IdGenerator,
};

/// Builds tasks, drawing each identifier from a shared generator.
#[derive(Debug)]
pub struct TaskFactory<G>
where
    G: IdGenerator + ?Sized,
{
    id_generator: Arc<G>,
}

impl<G> TaskFactory<G>
where
    G: IdGenerator + ?Sized,
{
    /// Creates a factory over the given identifier generator.
    #[must_use]
    pub const fn new(id_generator: Arc<G>) -> Self {
        Self { id_generator }
    }

    /// Creates a task with a fresh identifier, the given text and priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdsExhausted`] when the generator has no
    /// identifier left.
    pub fn create(
        &self,
        text: impl Into<String>,
        priority: Priority,
    ) -> Result<Task, TaskDomainError> {
        let id = self.id_generator.next_id()?;
        Ok(Task::new(id, text, priority))
    }
}

impl<G> Clone for TaskFactory<G>
where
    G: IdGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            id_generator: Arc::clone(&self.id_generator),
        }
    }
}
