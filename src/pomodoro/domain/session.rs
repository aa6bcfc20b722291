//! Pomodoro session aggregate root.

use super::{PomodoroDomainError, SessionId};
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Pomodoro session aggregate root.
///
/// A session is ACTIVE from creation until [`PomodoroSession::complete`]
/// is called, which is the only transition and is terminal. There is no
/// cancellation and no reopening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSession {
    id: SessionId,
    task_id: TaskId,
    #[serde(rename = "start_time")]
    started_at: DateTime<Utc>,
    #[serde(rename = "end_time")]
    ended_at: Option<DateTime<Utc>>,
    completed: bool,
}

/// A session that has been started but not yet assigned an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDraft {
    task_id: TaskId,
    started_at: DateTime<Utc>,
}

impl SessionDraft {
    /// Begins a draft session stamped with the current clock time.
    #[must_use]
    pub fn begin(task_id: TaskId, clock: &impl Clock) -> Self {
        Self {
            task_id,
            started_at: clock.utc(),
        }
    }

    /// Returns the referenced task id.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        self.task_id
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(self) -> DateTime<Utc> {
        self.started_at
    }

    /// Promotes the draft into an active session with the
    /// repository-assigned id.
    #[must_use]
    pub const fn into_session(self, id: SessionId) -> PomodoroSession {
        PomodoroSession {
            id,
            task_id: self.task_id,
            started_at: self.started_at,
            ended_at: None,
            completed: false,
        }
    }
}

/// Parameter object for reconstructing a persisted session record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSessionData {
    /// Persisted session identifier.
    pub id: SessionId,
    /// Persisted task back-reference.
    pub task_id: TaskId,
    /// Persisted start timestamp.
    pub started_at: DateTime<Utc>,
    /// Persisted end timestamp, if the session has been stopped.
    pub ended_at: Option<DateTime<Utc>>,
    /// Persisted completion flag.
    pub completed: bool,
}

impl PomodoroSession {
    /// Reconstructs a session from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedSessionData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            started_at: data.started_at,
            ended_at: data.ended_at,
            completed: data.completed,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the referenced task id.
    ///
    /// The reference is non-owning; the task may have been deleted since.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the end timestamp, if the session has been stopped.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Returns whether the session has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Completes the session, stamping the end time from the clock.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroDomainError::AlreadyCompleted`] when the session
    /// has already been stopped; completion is terminal.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), PomodoroDomainError> {
        if self.completed {
            return Err(PomodoroDomainError::AlreadyCompleted(self.id));
        }
        self.ended_at = Some(clock.utc());
        self.completed = true;
        Ok(())
    }

    /// Returns the elapsed whole seconds for a completed session.
    ///
    /// Returns `None` while the session is still active. The value is
    /// non-negative by construction: completion always happens at or
    /// after the start.
    #[must_use]
    pub fn duration_seconds(&self) -> Option<i64> {
        self.ended_at
            .map(|ended_at| ended_at.signed_duration_since(self.started_at).num_seconds())
    }
}
