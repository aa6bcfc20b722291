//! In-memory integration tests for Pomodoro session tracking.

use super::helpers::{World, create_task, world};
use chrono::Duration;
use rstest::rstest;
use tempo::pomodoro::{ports::SessionRepositoryError, services::PomodoroTrackerError};
use tempo::task::domain::TaskId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_focus_scenario_from_create_to_stats(world: World) {
    let task = create_task(&world, "Write report").await;
    assert_eq!(task.id().value(), 1);

    let session = world
        .tracker
        .start(task.id())
        .await
        .expect("start should succeed");
    assert_eq!(session.id().value(), 1);
    assert!(!session.is_completed());

    world.clock.advance(Duration::seconds(5));
    let stopped = world
        .tracker
        .stop(task.id())
        .await
        .expect("stop should succeed");
    assert!(stopped.is_completed());
    assert_eq!(stopped.duration_seconds(), Some(5));

    let stats = world.tracker.stats().await.expect("stats should succeed");
    assert_eq!(stats.completed_sessions().get(&task.id()), Some(&1));
    assert_eq!(stats.total_time_seconds(), 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn double_start_is_rejected(world: World) {
    let task = create_task(&world, "Write report").await;
    world
        .tracker
        .start(task.id())
        .await
        .expect("first start should succeed");

    let result = world.tracker.start(task.id()).await;
    assert!(matches!(
        result,
        Err(PomodoroTrackerError::Session(
            SessionRepositoryError::ActiveSessionExists(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stop_without_active_session_is_not_found(world: World) {
    let task = create_task(&world, "Write report").await;

    let result = world.tracker.stop(task.id()).await;
    assert!(matches!(
        result,
        Err(PomodoroTrackerError::NoActiveSession(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn start_for_unknown_task_is_not_found(world: World) {
    let id = TaskId::new(41).expect("valid task id");
    let result = world.tracker.start(id).await;
    assert!(matches!(
        result,
        Err(PomodoroTrackerError::TaskNotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_accumulate_over_repeated_sessions(world: World) {
    let task = create_task(&world, "Write report").await;
    let other = create_task(&world, "Review backlog").await;

    for seconds in [25, 17] {
        world
            .tracker
            .start(task.id())
            .await
            .expect("start should succeed");
        world.clock.advance(Duration::seconds(seconds));
        world
            .tracker
            .stop(task.id())
            .await
            .expect("stop should succeed");
    }

    world
        .tracker
        .start(other.id())
        .await
        .expect("start should succeed");
    world.clock.advance(Duration::seconds(8));
    world
        .tracker
        .stop(other.id())
        .await
        .expect("stop should succeed");

    let stats = world.tracker.stats().await.expect("stats should succeed");
    assert_eq!(stats.completed_sessions().get(&task.id()), Some(&2));
    assert_eq!(stats.completed_sessions().get(&other.id()), Some(&1));
    assert_eq!(stats.total_time_seconds(), 50);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zero_duration_session_counts_with_zero_seconds(world: World) {
    let task = create_task(&world, "Write report").await;
    world
        .tracker
        .start(task.id())
        .await
        .expect("start should succeed");
    // Stop immediately, no simulated time passing.
    world
        .tracker
        .stop(task.id())
        .await
        .expect("stop should succeed");

    let stats = world.tracker.stats().await.expect("stats should succeed");
    assert_eq!(stats.completed_sessions().get(&task.id()), Some(&1));
    assert_eq!(stats.total_time_seconds(), 0);
}
