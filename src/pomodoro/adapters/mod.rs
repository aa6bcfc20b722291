//! Persistence adapters for the Pomodoro tracker.
//!
//! Concrete implementations of the [`SessionRepository`] port.
//!
//! # Available Adapters
//!
//! - [`memory::InMemorySessionRepository`]: Thread-safe in-memory storage
//! - [`postgres::PostgresSessionRepository`]: `PostgreSQL` persistence
//!   using Diesel ORM
//!
//! [`SessionRepository`]: crate::pomodoro::ports::SessionRepository

pub mod memory;
pub mod postgres;
