//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod id_generator;
pub mod renderer;
pub mod repository;

pub use id_generator::IdGenerator;
pub use renderer::TaskRenderer;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
