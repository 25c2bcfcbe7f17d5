//! Task entity.

use super::{Priority, TaskId};

/// A unit of work with an identifier, text and priority.
///
/// The identifier is fixed at construction. Text and priority change in
/// place through the mutators below; repositories hold their own copy, so
/// a changed task must be written back to take effect in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    priority: Priority,
}

impl Task {
    /// Creates a task.
    ///
    /// Application code obtains tasks from
    /// [`TaskFactory`](crate::task::services::TaskFactory), which assigns a
    /// fresh identifier. Text is not validated; an empty string is legal.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            priority,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Replaces the task text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the task priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Raises the priority one step, saturating at [`Priority::High`].
    pub const fn raise_priority(&mut self) {
        self.priority = self.priority.up();
    }

    /// Lowers the priority one step, saturating at [`Priority::Low`].
    pub const fn lower_priority(&mut self) {
        self.priority = self.priority.down();
    }
}
