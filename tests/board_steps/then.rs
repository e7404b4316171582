//! Then steps for board reconciliation BDD scenarios.

use rstest_bdd_macros::then;
use taskflow::board::domain::{BOARD_COLUMNS, TaskId, TaskStatus};

use super::world::BoardWorld;

fn scenario_task(world: &BoardWorld) -> Result<TaskId, eyre::Report> {
    world
        .task_id
        .ok_or_else(|| eyre::eyre!("no task seeded in scenario world"))
}

#[then(r#"the task appears only in the "{column}" column"#)]
fn task_appears_only_in(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("unknown column in scenario: {err}"))?;
    let task_id = scenario_task(world)?;
    let columns = world.session.columns();
    for status in BOARD_COLUMNS {
        let present = columns.column(status).iter().any(|task| task.id == task_id);
        if status == expected && !present {
            return Err(eyre::eyre!("task missing from the {} column", status.as_str()));
        }
        if status != expected && present {
            return Err(eyre::eyre!(
                "task unexpectedly present in the {} column",
                status.as_str()
            ));
        }
    }
    Ok(())
}

#[then("no operation is pending for the task")]
fn no_operation_pending(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task_id = scenario_task(world)?;
    if world.session.has_pending(task_id) {
        return Err(eyre::eyre!("expected no pending operation for the task"));
    }
    Ok(())
}

#[then("no update call reaches the server")]
fn no_update_call(world: &BoardWorld) -> Result<(), eyre::Report> {
    let calls = world.gateway.update_calls();
    if calls != 0 {
        return Err(eyre::eyre!("expected no update calls, server saw {calls}"));
    }
    Ok(())
}

#[then("the board matches the server task collection")]
fn board_matches_server(world: &BoardWorld) -> Result<(), eyre::Report> {
    let board = world.session.snapshot();
    let server = world.gateway.tasks();
    if board != server {
        return Err(eyre::eyre!(
            "board snapshot diverged from the server task collection"
        ));
    }
    Ok(())
}

#[then(r#"the task title remains "{title}""#)]
fn task_title_remains(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = scenario_task(world)?;
    let task = world
        .session
        .task(task_id)
        .ok_or_else(|| eyre::eyre!("task missing from the board"))?;
    if task.title != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            task.title
        ));
    }
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let remaining = world.session.snapshot().len();
    if remaining != 0 {
        return Err(eyre::eyre!("expected an empty board, found {remaining} tasks"));
    }
    Ok(())
}
