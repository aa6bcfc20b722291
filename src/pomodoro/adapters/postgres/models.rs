//! Diesel row models for session persistence.

use super::schema::pomodoro_sessions;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for session records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pomodoro_sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SessionRow {
    /// Session identifier.
    pub id: i64,
    /// Task back-reference.
    pub task_id: i64,
    /// Start timestamp.
    pub started_at: DateTime<Utc>,
    /// End timestamp, if stopped.
    pub ended_at: Option<DateTime<Utc>>,
    /// Completion flag.
    pub completed: bool,
}

/// Insert model for session records; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pomodoro_sessions)]
pub struct NewSessionRow {
    /// Task back-reference.
    pub task_id: i64,
    /// Start timestamp.
    pub started_at: DateTime<Utc>,
    /// End timestamp; always absent at insert.
    pub ended_at: Option<DateTime<Utc>>,
    /// Completion flag; always false at insert.
    pub completed: bool,
}
