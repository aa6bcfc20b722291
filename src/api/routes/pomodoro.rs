//! Pomodoro tracker route handlers.

use crate::api::{ApiContext, error::ApiError};
use crate::pomodoro::{
    domain::{FocusStats, PomodoroSession},
    ports::SessionRepository,
};
use crate::task::{domain::TaskId, ports::TaskRepository};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use serde::Deserialize;

/// Request body for starting a session.
#[derive(Debug, Deserialize)]
pub struct StartSessionBody {
    /// The task to focus on; must exist at call time.
    pub task_id: i64,
}

/// `POST /pomodoro`
pub async fn start_session<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Json(body): Json<StartSessionBody>,
) -> Result<(StatusCode, Json<PomodoroSession>), ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let session = context.pomodoro.start(parse_task_id(body.task_id)?).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// `POST /pomodoro/{task_id}/stop`
pub async fn stop_session<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Path(task_id): Path<i64>,
) -> Result<Json<PomodoroSession>, ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let session = context.pomodoro.stop(parse_task_id(task_id)?).await?;
    Ok(Json(session))
}

/// `GET /pomodoro/stats`
pub async fn stats<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
) -> Result<Json<FocusStats>, ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let aggregate = context.pomodoro.stats().await?;
    Ok(Json(aggregate))
}

/// Maps a raw task id onto the domain id type; non-positive ids report
/// as missing.
fn parse_task_id(raw: i64) -> Result<TaskId, ApiError> {
    TaskId::new(raw).map_err(|_| ApiError::not_found(format!("task not found: {raw}")))
}
