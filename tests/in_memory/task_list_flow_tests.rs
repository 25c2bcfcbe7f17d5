//! In-memory integration tests for task list use-case sequences.

use super::helpers::{InMemoryService, service, summarize};
use rstest::rstest;
use tasklist::task::domain::{Priority, TaskId};

#[rstest]
fn reference_scenario_preserves_order_among_equal_priorities(service: InMemoryService) {
    let first = service.add_task("A").expect("add should succeed");
    let second = service.add_task("B").expect("add should succeed");
    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
    assert!(first.priority().is_min() && second.priority().is_min());

    service
        .raise_priority(first.id())
        .expect("raise should succeed");
    let after_first_raise = service.list_tasks().expect("list should succeed");
    assert_eq!(
        summarize(&after_first_raise),
        vec![
            (1, "A".to_owned(), "medium"),
            (2, "B".to_owned(), "low"),
        ]
    );

    service
        .edit_task(first.id(), "A-edited")
        .expect("edit should succeed");
    let edited = service
        .find_task(first.id())
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(edited.text(), "A-edited");

    service
        .raise_priority(second.id())
        .expect("raise should succeed");
    let after_second_raise = service.list_tasks().expect("list should succeed");
    assert_eq!(
        summarize(&after_second_raise),
        vec![
            (1, "A-edited".to_owned(), "medium"),
            (2, "B".to_owned(), "medium"),
        ]
    );

    service
        .remove_task(first.id())
        .expect("remove should succeed");
    let after_remove = service.list_tasks().expect("list should succeed");
    assert_eq!(summarize(&after_remove), vec![(2, "B".to_owned(), "medium")]);
}

#[rstest]
fn operations_on_unknown_ids_change_nothing(service: InMemoryService) {
    service.add_task("Only task").expect("add should succeed");
    let before = service.list_tasks().expect("list should succeed");
    let unknown = TaskId::new(77);

    service
        .edit_task(unknown, "Nope")
        .expect("edit should succeed");
    service
        .raise_priority(unknown)
        .expect("raise should succeed");
    service
        .lower_priority(unknown)
        .expect("lower should succeed");
    service
        .remove_task(unknown)
        .expect("remove should succeed");

    assert_eq!(service.list_tasks().expect("list should succeed"), before);
    assert!(
        service
            .find_task(unknown)
            .expect("lookup should succeed")
            .is_none()
    );
}

#[rstest]
fn lowering_restores_list_position(service: InMemoryService) {
    let first = service.add_task("First").expect("add should succeed");
    let second = service.add_task("Second").expect("add should succeed");

    service
        .raise_priority(second.id())
        .expect("raise should succeed");
    let raised = service.list_tasks().expect("list should succeed");
    assert_eq!(raised.first().map(|task| task.id()), Some(second.id()));

    service
        .lower_priority(second.id())
        .expect("lower should succeed");
    let lowered = service.list_tasks().expect("list should succeed");
    let ids: Vec<TaskId> = lowered.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    assert!(lowered.iter().all(|task| task.priority() == Priority::Low));
}
