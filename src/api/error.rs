//! Response-code mapping for domain and service errors.

use crate::pomodoro::{ports::SessionRepositoryError, services::PomodoroTrackerError};
use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskLifecycleError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// An HTTP-mapped error with an `{"error": ...}` body.
///
/// Conflict-class domain errors map to 400, missing records to 404, and
/// input validation to 422. Persistence failures are logged and surface
/// as an opaque 500; everything else carries the domain error's display
/// text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A 400 for violated uniqueness or state invariants.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 404 for references to records that do not exist.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// A 422 for requests that fail input validation.
    #[must_use]
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    /// An opaque 500 for infrastructure failures.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal error".to_owned(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTitle(_) => Self::conflict(err.to_string()),
            TaskRepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            TaskRepositoryError::Persistence(cause) => {
                tracing::error!(error = %cause, "task persistence failure");
                Self::internal()
            }
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain) => domain.into(),
            TaskLifecycleError::Repository(repository) => repository.into(),
        }
    }
}

impl From<SessionRepositoryError> for ApiError {
    fn from(err: SessionRepositoryError) -> Self {
        match err {
            SessionRepositoryError::ActiveSessionExists(_) => Self::conflict(err.to_string()),
            SessionRepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            SessionRepositoryError::Persistence(cause) => {
                tracing::error!(error = %cause, "session persistence failure");
                Self::internal()
            }
        }
    }
}

impl From<PomodoroTrackerError> for ApiError {
    fn from(err: PomodoroTrackerError) -> Self {
        match err {
            PomodoroTrackerError::TaskNotFound(_) | PomodoroTrackerError::NoActiveSession(_) => {
                Self::not_found(err.to_string())
            }
            PomodoroTrackerError::Domain(domain) => {
                tracing::error!(error = %domain, "unexpected session state transition");
                Self::internal()
            }
            PomodoroTrackerError::Session(session) => session.into(),
            PomodoroTrackerError::Task(task) => {
                // Existence checks surface as TaskNotFound above; anything
                // reaching here is infrastructure trouble.
                tracing::error!(error = %task, "task lookup failure");
                Self::internal()
            }
        }
    }
}
