//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use tasklist::task::{
    adapters::{memory::InMemoryTaskRepository, sequence::SequentialIdGenerator},
    domain::Task,
    services::{TaskFactory, TaskListService},
};

/// Service type wired to in-memory adapters.
pub type InMemoryService = TaskListService<InMemoryTaskRepository, SequentialIdGenerator>;

/// Provides a service over a fresh repository and generator.
#[fixture]
pub fn service() -> InMemoryService {
    TaskListService::new(
        Arc::new(InMemoryTaskRepository::new()),
        TaskFactory::new(Arc::new(SequentialIdGenerator::new())),
    )
}

/// Returns `(id, text, priority name)` triples for a listed task sequence.
pub fn summarize(tasks: &[Task]) -> Vec<(u64, String, &'static str)> {
    tasks
        .iter()
        .map(|task| {
            (
                task.id().value(),
                task.text().to_owned(),
                task.priority().as_str(),
            )
        })
        .collect()
}

/// Converts captured output bytes into lines.
///
/// # Errors
///
/// Returns an error if the output is not valid UTF-8.
pub fn output_lines(out: Vec<u8>) -> Result<Vec<String>, std::string::FromUtf8Error> {
    Ok(String::from_utf8(out)?.lines().map(str::to_owned).collect())
}
