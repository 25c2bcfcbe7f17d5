//! Adapter implementations of the task ports.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory task storage
//! - [`sequence::SequentialIdGenerator`]: monotonic counter issuing task
//!   identifiers
//! - [`render`]: plain, CSV and JSON task renderers

pub mod memory;
pub mod render;
pub mod sequence;
