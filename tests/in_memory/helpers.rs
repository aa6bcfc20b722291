//! Shared test helpers for in-memory backend integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex};
use tempo::pomodoro::{
    adapters::memory::InMemorySessionRepository, services::PomodoroTrackerService,
};
use tempo::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskLifecycleService},
};

/// Clock whose time only moves when a test advances it.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at an arbitrary fixed instant.
    pub fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
            .single()
            .expect("fixed test instant should be valid");
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().expect("clock mutex should not be poisoned");
        *now += duration;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex should not be poisoned")
    }
}

/// A fully wired in-memory backend with a manually driven clock.
pub struct World {
    /// Task store service.
    pub tasks: TaskLifecycleService<InMemoryTaskRepository, ManualClock>,
    /// Pomodoro tracker service.
    pub tracker:
        PomodoroTrackerService<InMemoryTaskRepository, InMemorySessionRepository, ManualClock>,
    /// Shared clock handle for advancing simulated time.
    pub clock: Arc<ManualClock>,
}

/// Provides a fresh backend per test; nothing is shared across tests.
#[fixture]
pub fn world() -> World {
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let session_repository = Arc::new(InMemorySessionRepository::new());
    let clock = Arc::new(ManualClock::fixed());

    World {
        tasks: TaskLifecycleService::new(Arc::clone(&task_repository), Arc::clone(&clock)),
        tracker: PomodoroTrackerService::new(
            task_repository,
            session_repository,
            Arc::clone(&clock),
        ),
        clock,
    }
}

/// Creates a task with the given title, panicking on failure.
pub async fn create_task(world: &World, title: &str) -> Task {
    world
        .tasks
        .create(CreateTaskRequest::new(title))
        .await
        .expect("task creation should succeed")
}
