//! In-memory integration tests for task store operations.

use super::helpers::{World, create_task, world};
use rstest::rstest;
use tempo::task::{
    domain::{TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn distinct_titles_all_listed_and_retrievable(world: World) {
    let first = create_task(&world, "Write report").await;
    let second = create_task(&world, "Review backlog").await;
    let third = create_task(&world, "Plan sprint").await;

    let listed = world.tasks.list(None).await.expect("list should succeed");
    assert_eq!(listed, vec![first.clone(), second.clone(), third.clone()]);

    for task in [first, second, third] {
        let fetched = world.tasks.get(task.id()).await.expect("get should succeed");
        assert_eq!(fetched, task);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_title_leaves_exactly_one_task(world: World) {
    create_task(&world, "Write report").await;

    let result = world
        .tasks
        .create(CreateTaskRequest::new("Write report"))
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::DuplicateTitle(_)
        ))
    ));

    let listed = world.tasks.list(None).await.expect("list should succeed");
    assert_eq!(listed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn titles_differing_only_in_case_are_distinct(world: World) {
    create_task(&world, "Write report").await;
    let second = create_task(&world, "write report").await;
    assert_eq!(second.title().as_str(), "write report");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_id_on_empty_store_is_not_found(world: World) {
    let id = TaskId::new(999).expect("valid task id");
    let result = world.tasks.get(id).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_conflict_keeps_original_record(world: World) {
    create_task(&world, "Write report").await;
    let victim = create_task(&world, "Review backlog").await;

    let result = world
        .tasks
        .update(
            UpdateTaskRequest::new(victim.id(), "Write report")
                .with_status(TaskStatus::Done),
        )
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::DuplicateTitle(_)
        ))
    ));

    let fetched = world
        .tasks
        .get(victim.id())
        .await
        .expect("get should succeed");
    assert_eq!(fetched.title().as_str(), "Review backlog");
    assert_eq!(fetched.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_get_is_not_found(world: World) {
    let task = create_task(&world, "Write report").await;

    world
        .tasks
        .delete(task.id())
        .await
        .expect("delete should succeed");

    let result = world.tasks.get(task.id()).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_returns_matching_tasks_in_insertion_order(world: World) {
    create_task(&world, "Write report").await;
    let started = world
        .tasks
        .create(CreateTaskRequest::new("Review backlog").with_status(TaskStatus::InProgress))
        .await
        .expect("creation should succeed");
    let finished = world
        .tasks
        .create(CreateTaskRequest::new("Plan sprint").with_status(TaskStatus::InProgress))
        .await
        .expect("creation should succeed");

    let filtered = world
        .tasks
        .list(Some(TaskStatus::InProgress))
        .await
        .expect("list should succeed");
    assert_eq!(filtered, vec![started, finished]);
}
