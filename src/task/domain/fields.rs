//! Validated scalar types for task fields.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for a task title, matching the request contract.
const MIN_TITLE_LENGTH: usize = 3;

/// Maximum length for a task title, matching `VARCHAR(100)`.
const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for a task description, matching `VARCHAR(300)`.
const MAX_DESCRIPTION_LENGTH: usize = 300;

/// Validated task title.
///
/// Titles are compared case-sensitively and are not trimmed or otherwise
/// normalised, so uniqueness is an exact character-for-character match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleLengthOutOfRange`] when the value
    /// is shorter than 3 or longer than 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&length) {
            return Err(TaskDomainError::TitleLengthOutOfRange {
                min: MIN_TITLE_LENGTH,
                max: MAX_TITLE_LENGTH,
                actual: length,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Validated task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated task description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the value
    /// exceeds 300 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(TaskDomainError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LENGTH,
                actual: length,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
