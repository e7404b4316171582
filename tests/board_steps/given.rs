//! Given steps for board reconciliation BDD scenarios.

use chrono::{TimeZone, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::board::{
    domain::{MemberRole, Project, ProjectMember, Task, TaskId, TaskPriority, TaskStatus, UserId},
    ports::GatewayError,
};

use super::world::{BoardWorld, run_async};

#[given(r#"a board with a task "{title}" in the "{column}" column"#)]
fn board_with_task(world: &mut BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("unknown column in scenario: {err}"))?;
    let created = Utc
        .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid seed timestamp"))?;
    let owner_id = UserId::new();
    let task = Task {
        id: TaskId::new(),
        project_id: world.project_id,
        title,
        description: None,
        status,
        priority: TaskPriority::Medium,
        position: 0,
        assignee: None,
        created_at: created,
        updated_at: created,
    };
    world.task_id = Some(task.id);
    world.gateway.seed_project(Project {
        id: world.project_id,
        name: "Scenario project".to_owned(),
        description: None,
        owner_id,
        members: vec![ProjectMember {
            id: owner_id,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: MemberRole::Owner,
        }],
        created_at: created,
        updated_at: created,
    });
    world.gateway.seed_tasks([task]);
    run_async(world.session.refresh()).wrap_err("initial board fetch")
}

#[given("the server rejects the next task update")]
fn server_rejects_update(world: &mut BoardWorld) {
    world
        .gateway
        .fail_next_update(GatewayError::new("validation failed"));
}
