//! `PostgreSQL` adapters for session persistence.
//!
//! Expected DDL. The partial unique index is the concurrency backstop for
//! the at-most-one-active-session invariant:
//!
//! ```sql
//! CREATE TABLE pomodoro_sessions (
//!     id         BIGSERIAL PRIMARY KEY,
//!     task_id    BIGINT NOT NULL,
//!     started_at TIMESTAMPTZ NOT NULL,
//!     ended_at   TIMESTAMPTZ,
//!     completed  BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! CREATE UNIQUE INDEX idx_pomodoro_sessions_one_active
//!     ON pomodoro_sessions (task_id) WHERE NOT completed;
//! ```
//!
//! `task_id` carries no foreign key: the reference is non-owning and must
//! survive deletion of the task.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresSessionRepository, SessionPgPool};
