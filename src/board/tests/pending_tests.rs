//! Unit tests for pending-operation registration and staleness.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use rstest::rstest;

use super::fixtures::sample_task;
use crate::board::domain::{
    PendingChange, PendingRegistry, ProjectId, TaskId, TaskStatus,
};

#[rstest]
fn resolve_returns_the_registered_operation() {
    let mut registry = PendingRegistry::new();
    let task_id = TaskId::new();

    let ticket = registry.register(
        task_id,
        PendingChange::StatusMove {
            prior_status: TaskStatus::Todo,
        },
    );
    assert!(registry.is_pending(task_id));

    let operation = registry.resolve(task_id, ticket).expect("current ticket");
    assert_eq!(operation.task_id(), task_id);
    assert_eq!(operation.ticket(), ticket);
    assert!(matches!(
        operation.change(),
        PendingChange::StatusMove {
            prior_status: TaskStatus::Todo
        }
    ));
    assert!(registry.is_empty());
}

#[rstest]
fn superseded_ticket_resolves_stale() {
    let mut registry = PendingRegistry::new();
    let task_id = TaskId::new();
    let prior = sample_task(ProjectId::new(), "baseline", TaskStatus::Todo, 1);

    let first = registry.register(
        task_id,
        PendingChange::StatusMove {
            prior_status: TaskStatus::Todo,
        },
    );
    let second = registry.register(task_id, PendingChange::FieldEdit { prior });

    // The first operation was replaced; its resolution must be discarded.
    assert_eq!(registry.resolve(task_id, first), None);
    assert!(registry.is_pending(task_id));

    let operation = registry.resolve(task_id, second).expect("current ticket");
    assert!(matches!(operation.change(), PendingChange::FieldEdit { .. }));
    assert!(registry.is_empty());
}

#[rstest]
fn resolve_unknown_task_is_stale() {
    let mut registry = PendingRegistry::new();
    let task_id = TaskId::new();
    let ticket = registry.register(
        task_id,
        PendingChange::StatusMove {
            prior_status: TaskStatus::Done,
        },
    );
    assert_eq!(registry.resolve(TaskId::new(), ticket), None);
}

#[rstest]
fn resolve_twice_is_stale_the_second_time() {
    let mut registry = PendingRegistry::new();
    let task_id = TaskId::new();
    let ticket = registry.register(
        task_id,
        PendingChange::StatusMove {
            prior_status: TaskStatus::Todo,
        },
    );

    assert!(registry.resolve(task_id, ticket).is_some());
    assert_eq!(registry.resolve(task_id, ticket), None);
}

#[rstest]
fn tickets_are_unique_across_tasks() {
    let mut registry = PendingRegistry::new();
    let first = registry.register(
        TaskId::new(),
        PendingChange::StatusMove {
            prior_status: TaskStatus::Todo,
        },
    );
    let second = registry.register(
        TaskId::new(),
        PendingChange::StatusMove {
            prior_status: TaskStatus::Done,
        },
    );

    assert!(first < second);
    assert_eq!(registry.len(), 2);
}
