//! Reference demo script exercising every task list operation.

use std::io::Write;

use crate::container::TaskListApp;
use crate::task::{ports::TaskRepository, services::TaskListResult};

/// Runs the demo script, writing section headings and printed task lists
/// to `out`.
///
/// Two tasks are added and the first is raised, then the first is edited,
/// then the second is raised, and finally the first is removed. The task
/// list is printed after each step.
///
/// # Errors
///
/// Returns [`TaskListError`](crate::task::services::TaskListError) when a
/// repository operation or a write to `out` fails.
pub fn run_demo<R>(app: &TaskListApp<R>, out: &mut impl Write) -> TaskListResult<()>
where
    R: TaskRepository,
{
    let service = app.task_list_service();
    let printer = app.task_printer();

    writeln!(out, "Create 2 tasks:")?;
    let first = service.add_task("A task example!")?;
    let second = service.add_task("Another task!")?;
    service.raise_priority(first.id())?;
    printer.print(out)?;

    writeln!(out, "Edit task:")?;
    service.edit_task(first.id(), "Text updated!")?;
    printer.print(out)?;

    writeln!(out, "Increase priority:")?;
    service.raise_priority(second.id())?;
    printer.print(out)?;

    writeln!(out, "Removing a task:")?;
    service.remove_task(first.id())?;
    printer.print(out)?;

    Ok(())
}
