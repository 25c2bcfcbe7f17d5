//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasklist::task::domain::{Priority, Task, TaskId};

fn stored_task(world: &TaskListWorld, id: u64) -> Result<Task, eyre::Report> {
    world
        .service
        .find_task(TaskId::new(id))
        .wrap_err("look up task")?
        .ok_or_else(|| eyre::eyre!("task {id} not found"))
}

#[then(r#"the task list reads "{ids}""#)]
fn task_list_reads(world: &TaskListWorld, ids: String) -> Result<(), eyre::Report> {
    let expected = ids
        .split(',')
        .map(|raw| raw.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("parse expected task ids")?;
    let listed: Vec<u64> = world
        .service
        .list_tasks()
        .wrap_err("list tasks")?
        .iter()
        .map(|task| task.id().value())
        .collect();

    eyre::ensure!(
        listed == expected,
        "expected task order {expected:?}, found {listed:?}"
    );
    Ok(())
}

#[then(r#"task {id:u64} has priority "{priority}""#)]
fn task_has_priority(
    world: &TaskListWorld,
    id: u64,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let task = stored_task(world, id)?;

    eyre::ensure!(
        task.priority() == expected,
        "expected priority {expected}, found {}",
        task.priority()
    );
    Ok(())
}

#[then(r#"task {id:u64} has text "{text}""#)]
fn task_has_text(world: &TaskListWorld, id: u64, text: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, id)?;

    eyre::ensure!(
        task.text() == text,
        "expected text {text:?}, found {:?}",
        task.text()
    );
    Ok(())
}
