//! Domain model for the task list.
//!
//! Tasks carry an identifier assigned once at creation, free-form text and a
//! bounded [`Priority`]. All storage and presentation concerns stay outside
//! the domain boundary.

mod error;
mod ids;
mod priority;
mod task;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::Task;
