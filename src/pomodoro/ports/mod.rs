//! Port contracts for the Pomodoro tracker.
//!
//! Ports define infrastructure-agnostic interfaces used by session
//! services.

pub mod repository;

pub use repository::{SessionRepository, SessionRepositoryError, SessionRepositoryResult};
