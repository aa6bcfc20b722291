//! Repository port for session persistence and the one-active invariant.

use crate::pomodoro::domain::{PomodoroSession, SessionDraft, SessionId};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session repository operations.
pub type SessionRepositoryResult<T> = Result<T, SessionRepositoryError>;

/// Session persistence contract.
///
/// The at-most-one-active-session-per-task invariant lives here: the
/// check is performed atomically with the insert, so two concurrent
/// starts for the same task cannot both succeed.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new active session and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::ActiveSessionExists`] when an
    /// uncompleted session already exists for the draft's task.
    async fn insert(&self, draft: &SessionDraft) -> SessionRepositoryResult<PomodoroSession>;

    /// Finds the single active session for a task.
    ///
    /// Returns `None` when the task has no active session.
    async fn find_active(&self, task_id: TaskId)
    -> SessionRepositoryResult<Option<PomodoroSession>>;

    /// Persists changes to an existing session (completion).
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::NotFound`] when the session does
    /// not exist.
    async fn update(&self, session: &PomodoroSession) -> SessionRepositoryResult<()>;

    /// Returns all completed sessions, in id order.
    ///
    /// Sessions are never deleted by any exposed operation, so this is
    /// the full completion history.
    async fn list_completed(&self) -> SessionRepositoryResult<Vec<PomodoroSession>>;
}

/// Errors returned by session repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionRepositoryError {
    /// An uncompleted session already exists for this task.
    #[error("active session already exists for task {0}")]
    ActiveSessionExists(TaskId),

    /// The session was not found.
    #[error("session not found: {0}")]
    NotFound(SessionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
