//! `PostgreSQL` adapters for task store persistence.
//!
//! Expected DDL:
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id          BIGSERIAL PRIMARY KEY,
//!     title       VARCHAR(100) NOT NULL,
//!     description VARCHAR(300),
//!     status      VARCHAR(20) NOT NULL,
//!     created_at  TIMESTAMPTZ NOT NULL,
//!     updated_at  TIMESTAMPTZ NOT NULL
//! );
//! CREATE UNIQUE INDEX idx_tasks_title_unique ON tasks (title);
//! ```

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
