//! Service printing the task list through a renderer.

use std::io::Write;
use std::sync::Arc;

use crate::task::ports::{TaskRenderer, TaskRepository};

use super::TaskListResult;

/// Writes the listed tasks, one rendered line each, in list order.
pub struct TaskPrinter<R, P>
where
    R: TaskRepository + ?Sized,
    P: TaskRenderer + ?Sized,
{
    repository: Arc<R>,
    renderer: Arc<P>,
}

impl<R, P> TaskPrinter<R, P>
where
    R: TaskRepository + ?Sized,
    P: TaskRenderer + ?Sized,
{
    /// Creates a printer over a repository and renderer.
    #[must_use]
    pub const fn new(repository: Arc<R>, renderer: Arc<P>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    /// Renders every listed task to `out`, one line per task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`](super::TaskListError::Repository)
    /// when listing fails or
    /// [`TaskListError::Output`](super::TaskListError::Output) when writing
    /// to `out` fails.
    pub fn print(&self, out: &mut impl Write) -> TaskListResult<()> {
        for task in self.repository.list()? {
            writeln!(out, "{}", self.renderer.render(&task))?;
        }
        Ok(())
    }
}
