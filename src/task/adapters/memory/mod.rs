//! In-memory adapters for the task list.

mod task;

pub use task::InMemoryTaskRepository;
