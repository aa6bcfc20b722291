//! Task store route handlers.

use crate::api::{ApiContext, error::ApiError};
use crate::pomodoro::ports::SessionRepository;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use mockable::Clock;
use serde::Deserialize;

/// Request body for creating or replacing a task.
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    /// Task title, 3–100 characters, unique across tasks.
    pub title: String,
    /// Optional description, at most 300 characters.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status; defaults to `TODO` when omitted.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Query parameters accepted by the task listing.
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Optional status filter.
    #[serde(default)]
    pub status: Option<String>,
}

/// `POST /tasks`
pub async fn create_task<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Json(body): Json<TaskBody>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = CreateTaskRequest::new(body.title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let task = context.tasks.create(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks`
pub async fn list_tasks<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let status = query
        .status
        .as_deref()
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(|err| ApiError::unprocessable(err.to_string()))?;

    let tasks = context.tasks.list(status).await?;
    Ok(Json(tasks))
}

/// `GET /tasks/{id}`
pub async fn get_task<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = context.tasks.get(parse_task_id(id)?).await?;
    Ok(Json(task))
}

/// `PUT /tasks/{id}`
pub async fn update_task<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Path(id): Path<i64>,
    Json(body): Json<TaskBody>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = UpdateTaskRequest::new(parse_task_id(id)?, body.title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let task = context.tasks.update(request).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub async fn delete_task<R, S, C>(
    State(context): State<ApiContext<R, S, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    S: SessionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    context.tasks.delete(parse_task_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Maps a raw path id onto the domain id type.
///
/// Non-positive ids can never name a record, so they report as missing
/// rather than malformed.
fn parse_task_id(raw: i64) -> Result<TaskId, ApiError> {
    TaskId::new(raw).map_err(|_| ApiError::not_found(format!("task not found: {raw}")))
}
