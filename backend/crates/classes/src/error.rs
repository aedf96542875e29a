//! Class Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Class-specific result type alias
pub type ClassResult<T> = Result<T, ClassError>;

/// Class-specific error variants
#[derive(Debug, Error)]
pub enum ClassError {
    /// A student attempted a faculty-only operation
    #[error("Operation not permitted for students")]
    InvalidStudentOperation,

    /// A faculty member attempted a student-only operation, or a faculty
    /// member acted on a class they do not own
    #[error("Operation not permitted for this faculty member")]
    InvalidFacultyOperation,

    /// No class with the given id or join code
    #[error("Class not found")]
    ClassNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClassError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClassError::InvalidStudentOperation
            | ClassError::InvalidFacultyOperation
            | ClassError::ClassNotFound => StatusCode::BAD_REQUEST,
            ClassError::Database(_) | ClassError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassError::InvalidStudentOperation
            | ClassError::InvalidFacultyOperation
            | ClassError::ClassNotFound => ErrorKind::BadRequest,
            ClassError::Database(_) | ClassError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, hiding infrastructure detail
    pub fn to_app_error(&self) -> AppError {
        match self {
            ClassError::Database(_) | ClassError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ClassError::Database(e) => {
                tracing::error!(error = %e, "Class database error");
            }
            ClassError::Internal(msg) => {
                tracing::error!(message = %msg, "Class internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Class error");
            }
        }
    }
}

impl IntoResponse for ClassError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
