//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let tasks = world
        .service
        .list_tasks()
        .wrap_err("list tasks for empty world")?;
    eyre::ensure!(tasks.is_empty(), "expected an empty task list");
    Ok(())
}

#[given(r#"a task "{text}" has been added"#)]
fn task_has_been_added(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    world
        .service
        .add_task(text)
        .wrap_err("add task in scenario setup")?;
    Ok(())
}
