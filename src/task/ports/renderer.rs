//! Task rendering port.

use crate::task::domain::Task;

/// Maps a task to the single line shown for it when tasks are printed.
///
/// Implementations must be pure: the same task always renders to the same
/// string, and rendering never fails.
pub trait TaskRenderer: Send + Sync {
    /// Renders `task` as one display line, without a trailing newline.
    fn render(&self, task: &Task) -> String;
}
