//! Error types for session domain validation.

use super::SessionId;
use thiserror::Error;

/// Errors returned while constructing or transitioning session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PomodoroDomainError {
    /// The session id is not a positive integer.
    #[error("invalid session id {0}, expected a positive integer")]
    InvalidSessionId(i64),

    /// The session has already been completed; completion is terminal.
    #[error("session {0} is already completed")]
    AlreadyCompleted(SessionId),
}
