//! Task renderers used when printing the task list.

use serde_json::json;

use crate::task::{domain::Task, ports::TaskRenderer};

/// Renders a task as `- {id}: {text}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl TaskRenderer for PlainRenderer {
    fn render(&self, task: &Task) -> String {
        format!("- {}: {}", task.id(), task.text())
    }
}

/// Renders a task as comma-separated `{id},{text},{level}` fields.
///
/// Text is written verbatim, without quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl TaskRenderer for CsvRenderer {
    fn render(&self, task: &Task) -> String {
        format!(
            "{},{},{}",
            task.id(),
            task.text(),
            task.priority().level()
        )
    }
}

/// Renders a task as a single-line JSON object.
///
/// The identifier and priority use their serde forms: a number and the
/// canonical priority name.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl TaskRenderer for JsonRenderer {
    fn render(&self, task: &Task) -> String {
        json!({
            "id": task.id(),
            "text": task.text(),
            "priority": task.priority(),
        })
        .to_string()
    }
}
