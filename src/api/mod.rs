//! HTTP surface for Tempo.
//!
//! A thin axum adapter over the task store and Pomodoro tracker
//! services: handlers parse requests into typed service invocations and
//! map domain outcomes onto response codes (conflicts → 400, missing
//! records → 404, invalid input → 422). All state is injected; the
//! router owns nothing but service handles.
//!
//! # Endpoints
//!
//! ```text
//! POST   /tasks                      create a task
//! GET    /tasks?status=              list tasks, optional status filter
//! GET    /tasks/{id}                 fetch one task
//! PUT    /tasks/{id}                 replace title/description/status
//! DELETE /tasks/{id}                 delete permanently
//! POST   /pomodoro                   start a session for a task
//! POST   /pomodoro/{task_id}/stop    stop the active session
//! GET    /pomodoro/stats             aggregate completed-session stats
//! GET    /health                     liveness probe
//! ```

pub mod error;
pub mod routes;

use crate::pomodoro::{ports::SessionRepository, services::PomodoroTrackerService};
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::{
    Json, Router,
    routing::{get, post},
};
use mockable::Clock;
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Shared handler state: one service per bounded context.
pub struct ApiContext<R, S, C>
where
    R: TaskRepository,
    S: SessionRepository,
    C: Clock + Send + Sync,
{
    /// Task store service.
    pub tasks: TaskLifecycleService<R, C>,
    /// Pomodoro tracker service.
    pub pomodoro: PomodoroTrackerService<R, S, C>,
}

impl<R, S, C> Clone for ApiContext<R, S, C>
where
    R: TaskRepository,
    S: SessionRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            pomodoro: self.pomodoro.clone(),
        }
    }
}

impl<R, S, C> ApiContext<R, S, C>
where
    R: TaskRepository,
    S: SessionRepository,
    C: Clock + Send + Sync,
{
    /// Creates the handler state from the two services.
    #[must_use]
    pub const fn new(
        tasks: TaskLifecycleService<R, C>,
        pomodoro: PomodoroTrackerService<R, S, C>,
    ) -> Self {
        Self { tasks, pomodoro }
    }
}

/// Builds the application router over the given context.
pub fn build_router<R, S, C>(context: ApiContext<R, S, C>) -> Router
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks::<R, S, C>).post(routes::tasks::create_task::<R, S, C>),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task::<R, S, C>)
                .put(routes::tasks::update_task::<R, S, C>)
                .delete(routes::tasks::delete_task::<R, S, C>),
        )
        .route("/pomodoro", post(routes::pomodoro::start_session::<R, S, C>))
        .route(
            "/pomodoro/{task_id}/stop",
            post(routes::pomodoro::stop_session::<R, S, C>),
        )
        .route("/pomodoro/stats", get(routes::pomodoro::stats::<R, S, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}
