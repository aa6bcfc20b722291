//! Identifier type for Pomodoro sessions.

use super::PomodoroDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Pomodoro session.
///
/// Assigned by the repository from a strictly monotonic source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SessionId(i64);

impl SessionId {
    /// Creates a validated session identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroDomainError::InvalidSessionId`] when the value is
    /// not positive.
    pub const fn new(value: i64) -> Result<Self, PomodoroDomainError> {
        if value <= 0 {
            return Err(PomodoroDomainError::InvalidSessionId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
