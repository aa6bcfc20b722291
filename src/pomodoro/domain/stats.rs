//! Aggregate statistics over completed sessions.

use super::PomodoroSession;
use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full-history aggregate over completed Pomodoro sessions.
///
/// Only completed sessions contribute; active sessions are invisible to
/// the aggregate until stopped. There is no date-range or per-task
/// filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStats {
    completed_sessions: BTreeMap<TaskId, u64>,
    total_time_seconds: i64,
}

impl FocusStats {
    /// Folds completed sessions into per-task counts and a grand total of
    /// elapsed whole seconds.
    #[must_use]
    pub fn from_sessions<'a>(sessions: impl IntoIterator<Item = &'a PomodoroSession>) -> Self {
        let mut stats = Self::default();
        for session in sessions {
            let Some(duration) = session.duration_seconds() else {
                continue;
            };
            *stats.completed_sessions.entry(session.task_id()).or_default() += 1;
            stats.total_time_seconds += duration;
        }
        stats
    }

    /// Returns the completed-session count per task.
    #[must_use]
    pub const fn completed_sessions(&self) -> &BTreeMap<TaskId, u64> {
        &self.completed_sessions
    }

    /// Returns the total elapsed seconds across all completed sessions.
    #[must_use]
    pub const fn total_time_seconds(&self) -> i64 {
        self.total_time_seconds
    }
}
