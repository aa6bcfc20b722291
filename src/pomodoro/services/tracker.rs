//! Service layer for starting, stopping, and aggregating focus sessions.

use crate::pomodoro::{
    domain::{FocusStats, PomodoroDomainError, PomodoroSession, SessionDraft},
    ports::{SessionRepository, SessionRepositoryError},
};
use crate::task::{
    domain::TaskId,
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for Pomodoro tracker operations.
#[derive(Debug, Error)]
pub enum PomodoroTrackerError {
    /// The referenced task does not exist at start time.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task has no active session to stop.
    #[error("no active session for task {0}")]
    NoActiveSession(TaskId),

    /// Domain state transition failed.
    #[error(transparent)]
    Domain(#[from] PomodoroDomainError),

    /// Session repository operation failed.
    #[error(transparent)]
    Session(#[from] SessionRepositoryError),

    /// Task lookup failed in the task repository.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),
}

/// Result type for Pomodoro tracker service operations.
pub type PomodoroTrackerResult<T> = Result<T, PomodoroTrackerError>;

/// Pomodoro tracker orchestration service.
///
/// Holds the session repository it owns plus a read-only view of the task
/// repository for existence checks at start time. Task deletion does not
/// cascade here: sessions keep their back-reference regardless.
pub struct PomodoroTrackerService<T, S, C>
where
    T: TaskRepository,
    S: SessionRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    sessions: Arc<S>,
    clock: Arc<C>,
}

impl<T, S, C> Clone for PomodoroTrackerService<T, S, C>
where
    T: TaskRepository,
    S: SessionRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            sessions: Arc::clone(&self.sessions),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, S, C> PomodoroTrackerService<T, S, C>
where
    T: TaskRepository,
    S: SessionRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new Pomodoro tracker service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, sessions: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            sessions,
            clock,
        }
    }

    /// Starts a focus session for a task.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroTrackerError::TaskNotFound`] when the task does
    /// not exist at call time, or
    /// [`SessionRepositoryError::ActiveSessionExists`] when an
    /// uncompleted session already exists for the task.
    pub async fn start(&self, task_id: TaskId) -> PomodoroTrackerResult<PomodoroSession> {
        if self.tasks.find_by_id(task_id).await?.is_none() {
            return Err(PomodoroTrackerError::TaskNotFound(task_id));
        }

        let draft = SessionDraft::begin(task_id, &*self.clock);
        Ok(self.sessions.insert(&draft).await?)
    }

    /// Stops the single active session for a task.
    ///
    /// Stopping is not idempotent: once the session has completed, a
    /// repeat call finds no active session and fails accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroTrackerError::NoActiveSession`] when the task
    /// has no uncompleted session.
    pub async fn stop(&self, task_id: TaskId) -> PomodoroTrackerResult<PomodoroSession> {
        let mut session = self
            .sessions
            .find_active(task_id)
            .await?
            .ok_or(PomodoroTrackerError::NoActiveSession(task_id))?;

        session.complete(&*self.clock)?;
        self.sessions.update(&session).await?;
        Ok(session)
    }

    /// Aggregates completed sessions into per-task counts and a total
    /// elapsed-seconds figure over the full history.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroTrackerError::Session`] when the listing fails.
    pub async fn stats(&self) -> PomodoroTrackerResult<FocusStats> {
        let completed = self.sessions.list_completed().await?;
        Ok(FocusStats::from_sessions(&completed))
    }
}
