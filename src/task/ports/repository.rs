//! Repository port for task persistence, lookup, and uniqueness checks.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskStatus, TaskTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The repository owns id assignment: implementations draw ids from a
/// strictly monotonic source (an in-memory counter or a database
/// sequence), so an id is never reused after deletion.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTitle`] when any existing
    /// task already holds the draft's title.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Finds a task by its identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks, optionally filtered by status, in id order.
    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist, or [`TaskRepositoryError::DuplicateTitle`] when a different
    /// task already holds the new title.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Another task already holds this title.
    #[error("task title already in use: {0}")]
    DuplicateTitle(TaskTitle),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
