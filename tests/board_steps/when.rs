//! When steps for board reconciliation BDD scenarios.

use rstest_bdd_macros::when;
use taskflow::board::domain::{TaskId, TaskPatch, TaskStatus};

use super::world::{BoardWorld, run_async};

fn scenario_task(world: &BoardWorld) -> Result<TaskId, eyre::Report> {
    world
        .task_id
        .ok_or_else(|| eyre::eyre!("no task seeded in scenario world"))
}

#[when(r#"the task is dropped into the "{column}" column"#)]
fn task_dropped(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("unknown column in scenario: {err}"))?;
    let task_id = scenario_task(world)?;
    run_async(world.session.on_task_dropped(task_id, Some(status)));
    Ok(())
}

#[when(r#"the task title is edited to "{new_title}""#)]
fn task_title_edited(world: &mut BoardWorld, new_title: String) -> Result<(), eyre::Report> {
    let task_id = scenario_task(world)?;
    run_async(
        world
            .session
            .on_task_edited(task_id, TaskPatch::new().with_title(new_title)),
    );
    Ok(())
}

#[when("the task is deleted")]
fn task_deleted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = scenario_task(world)?;
    run_async(world.session.on_task_deleted(task_id));
    Ok(())
}
