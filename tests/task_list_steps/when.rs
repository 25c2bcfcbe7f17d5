//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::task::domain::TaskId;

#[when("the priority of task {id:u64} is raised")]
fn raise_priority(world: &mut TaskListWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .service
        .raise_priority(TaskId::new(id))
        .wrap_err("raise task priority")?;
    Ok(())
}

#[when("task {id:u64} is raised {times:u64} times")]
fn raise_priority_repeatedly(
    world: &mut TaskListWorld,
    id: u64,
    times: u64,
) -> Result<(), eyre::Report> {
    for _ in 0..times {
        world
            .service
            .raise_priority(TaskId::new(id))
            .wrap_err("raise task priority repeatedly")?;
    }
    Ok(())
}

#[when("the priority of task {id:u64} is lowered")]
fn lower_priority(world: &mut TaskListWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .service
        .lower_priority(TaskId::new(id))
        .wrap_err("lower task priority")?;
    Ok(())
}

#[when(r#"task {id:u64} is edited to "{text}""#)]
fn edit_task(world: &mut TaskListWorld, id: u64, text: String) -> Result<(), eyre::Report> {
    world
        .service
        .edit_task(TaskId::new(id), text)
        .wrap_err("edit task text")?;
    Ok(())
}

#[when("task {id:u64} is removed")]
fn remove_task(world: &mut TaskListWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .service
        .remove_task(TaskId::new(id))
        .wrap_err("remove task")?;
    Ok(())
}

#[when(r#"a task "{text}" is added"#)]
fn add_task(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    world.service.add_task(text).wrap_err("add task")?;
    Ok(())
}
