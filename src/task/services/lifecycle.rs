//! Service layer for task creation, lookup, update, and deletion.

use crate::task::{
    domain::{Task, TaskDescription, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
}

impl CreateTaskRequest {
    /// Creates a request with the required title; the status defaults to
    /// [`TaskStatus::Todo`].
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Request payload for replacing a task's fields in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the task's fields; an unset status
    /// resets the task to [`TaskStatus::Todo`], matching the
    /// full-replacement contract.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task store orchestration service.
///
/// Validation always precedes mutation: a request that fails validation
/// or conflicts with an existing record leaves the store untouched.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task with a fresh repository-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when title or description
    /// validation fails, or [`TaskLifecycleError::Repository`] when the
    /// title is already in use.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request.description.map(TaskDescription::new).transpose()?;
        let draft = TaskDraft::new(title, description, request.status, &*self.clock);
        Ok(self.repository.insert(&draft).await?)
    }

    /// Returns all tasks, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list(&self, status: Option<TaskStatus>) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(status).await?)
    }

    /// Retrieves a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the id.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Replaces a task's title, description, and status in full.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id is absent,
    /// [`TaskLifecycleError::Domain`] when validation fails, or
    /// [`TaskRepositoryError::DuplicateTitle`] when a different task
    /// already holds the new title. The stored record is unchanged on
    /// every error path.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request.description.map(TaskDescription::new).transpose()?;
        let mut task = self.get(request.id).await?;
        task.replace(title, description, request.status, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// Sessions referencing the task are left intact; the reference is a
    /// back-reference only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id is absent.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
