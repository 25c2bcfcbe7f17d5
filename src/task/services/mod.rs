//! Application services for task list orchestration.

mod factory;
mod lifecycle;
mod printing;

pub use factory::TaskFactory;
pub use lifecycle::{TaskListError, TaskListResult, TaskListService};
pub use printing::TaskPrinter;
