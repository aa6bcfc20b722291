//! Service orchestration tests for the task store.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn task_id(value: i64) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids(service: TestService) {
    let first = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("first creation should succeed");
    let second = service
        .create(CreateTaskRequest::new("Review backlog"))
        .await
        .expect("second creation should succeed");

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_are_each_retrievable(service: TestService) {
    let created = service
        .create(
            CreateTaskRequest::new("Write report")
                .with_description("Quarterly summary")
                .with_status(TaskStatus::InProgress),
        )
        .await
        .expect("creation should succeed");

    let fetched = service.get(created.id()).await.expect("get should succeed");
    assert_eq!(fetched, created);

    let listed = service.list(None).await.expect("list should succeed");
    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_title_is_rejected_and_store_unchanged(service: TestService) {
    service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("first creation should succeed");

    let result = service.create(CreateTaskRequest::new("Write report")).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::DuplicateTitle(_)
        ))
    ));

    let listed = service.list(None).await.expect("list should succeed");
    assert_eq!(listed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn short_title_fails_validation_before_any_mutation(service: TestService) {
    let result = service.create(CreateTaskRequest::new("ab")).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::TitleLengthOutOfRange { .. }
        ))
    ));

    let listed = service.list(None).await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status(service: TestService) {
    service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");
    let in_progress = service
        .create(CreateTaskRequest::new("Review backlog").with_status(TaskStatus::InProgress))
        .await
        .expect("creation should succeed");

    let filtered = service
        .list(Some(TaskStatus::InProgress))
        .await
        .expect("list should succeed");
    assert_eq!(filtered, vec![in_progress]);

    let done = service
        .list(Some(TaskStatus::Done))
        .await
        .expect("list should succeed");
    assert!(done.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_on_empty_store_reports_not_found(service: TestService) {
    let result = service.get(task_id(999)).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_all_fields(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Write report").with_description("Quarterly summary"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            UpdateTaskRequest::new(created.id(), "Publish report").with_status(TaskStatus::Done),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title().as_str(), "Publish report");
    // Full replacement: the omitted description is cleared, not kept.
    assert!(updated.description().is_none());
    assert_eq!(updated.status(), TaskStatus::Done);

    let fetched = service.get(created.id()).await.expect("get should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_to_another_tasks_title_is_rejected(service: TestService) {
    let _first = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");
    let second = service
        .create(CreateTaskRequest::new("Review backlog"))
        .await
        .expect("creation should succeed");

    let result = service
        .update(UpdateTaskRequest::new(second.id(), "Write report"))
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::DuplicateTitle(_)
        ))
    ));

    // The rejected update left the original record unchanged.
    let fetched = service.get(second.id()).await.expect("get should succeed");
    assert_eq!(fetched, second);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeping_own_title_succeeds(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            UpdateTaskRequest::new(created.id(), "Write report")
                .with_status(TaskStatus::InProgress),
        )
        .await
        .expect("same-title update should succeed");
    assert_eq!(updated.status(), TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_not_found(service: TestService) {
    let result = service
        .update(UpdateTaskRequest::new(task_id(42), "Whatever title"))
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_get_reports_not_found(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");

    service
        .delete(created.id())
        .await
        .expect("delete should succeed");

    let result = service.get(created.id()).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));

    let repeat = service.delete(created.id()).await;
    assert!(matches!(
        repeat,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_never_reused_after_deletion(service: TestService) {
    let _first = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");
    let second = service
        .create(CreateTaskRequest::new("Review backlog"))
        .await
        .expect("creation should succeed");

    service
        .delete(second.id())
        .await
        .expect("delete should succeed");

    // With length-derived ids this would collide with the first task's
    // neighbour; the monotonic counter keeps moving forward instead.
    let third = service
        .create(CreateTaskRequest::new("Plan sprint"))
        .await
        .expect("creation should succeed");
    assert_eq!(third.id().value(), 3);

    let titles: Vec<_> = service
        .list(None)
        .await
        .expect("list should succeed")
        .into_iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    assert_eq!(titles, vec!["Write report".to_owned(), "Plan sprint".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_title_becomes_available_again(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");
    service
        .delete(created.id())
        .await
        .expect("delete should succeed");

    let recreated = service
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("title freed by deletion should be accepted");
    assert_eq!(recreated.id().value(), 2);
}
