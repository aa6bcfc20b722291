//! Domain model for Pomodoro focus sessions.
//!
//! A session belongs to exactly one task via a non-owning back-reference;
//! deleting the task later does not touch its sessions. Per task, at most
//! one session may be active at any time; the repository enforces that
//! invariant atomically with the insert.

mod error;
mod ids;
mod session;
mod stats;

pub use error::PomodoroDomainError;
pub use ids::SessionId;
pub use session::{PersistedSessionData, PomodoroSession, SessionDraft};
pub use stats::FocusStats;
