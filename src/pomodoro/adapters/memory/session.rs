//! Thread-safe in-memory session repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::pomodoro::{
    domain::{PomodoroSession, SessionDraft, SessionId},
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};
use crate::task::domain::TaskId;

/// Thread-safe in-memory session repository.
///
/// An active-session index keyed by task id makes the one-active check
/// O(1) and atomic with the insert under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    state: Arc<RwLock<InMemorySessionState>>,
}

#[derive(Debug)]
struct InMemorySessionState {
    sessions: BTreeMap<SessionId, PomodoroSession>,
    active_index: HashMap<TaskId, SessionId>,
    next_id: i64,
}

impl Default for InMemorySessionState {
    fn default() -> Self {
        Self {
            sessions: BTreeMap::new(),
            active_index: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemorySessionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_state(
        &self,
    ) -> SessionRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemorySessionState>> {
        self.state.write().map_err(|err| {
            SessionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn read_state(
        &self,
    ) -> SessionRepositoryResult<std::sync::RwLockReadGuard<'_, InMemorySessionState>> {
        self.state.read().map_err(|err| {
            SessionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, draft: &SessionDraft) -> SessionRepositoryResult<PomodoroSession> {
        let mut state = self.write_state()?;
        if state.active_index.contains_key(&draft.task_id()) {
            return Err(SessionRepositoryError::ActiveSessionExists(draft.task_id()));
        }

        let id = SessionId::new(state.next_id).map_err(SessionRepositoryError::persistence)?;
        state.next_id += 1;

        let session = draft.into_session(id);
        state.active_index.insert(session.task_id(), id);
        state.sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn find_active(
        &self,
        task_id: TaskId,
    ) -> SessionRepositoryResult<Option<PomodoroSession>> {
        let state = self.read_state()?;
        let session = state
            .active_index
            .get(&task_id)
            .and_then(|id| state.sessions.get(id))
            .cloned();
        Ok(session)
    }

    async fn update(&self, session: &PomodoroSession) -> SessionRepositoryResult<()> {
        let mut state = self.write_state()?;
        if !state.sessions.contains_key(&session.id()) {
            return Err(SessionRepositoryError::NotFound(session.id()));
        }

        if session.is_completed() {
            state.active_index.remove(&session.task_id());
        }
        state.sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn list_completed(&self) -> SessionRepositoryResult<Vec<PomodoroSession>> {
        let state = self.read_state()?;
        Ok(state
            .sessions
            .values()
            .filter(|session| session.is_completed())
            .cloned()
            .collect())
    }
}
