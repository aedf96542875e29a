//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// The first five variants are classified, client-correctable results;
/// everything below them is infrastructure failure passed through from a
/// collaborator and surfaced opaquely.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email fails the address grammar
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Password fails the strength policy
    #[error("Invalid password format")]
    InvalidPasswordFormat,

    /// Signup uniqueness violated
    #[error("Email already exists")]
    EmailExists,

    /// Login credential mismatch; unknown email and wrong password both
    /// map here so callers cannot enumerate accounts
    #[error("Invalid email or password")]
    InvalidEmailPassword,

    /// Password-change precondition failed (unknown account or wrong
    /// old password)
    #[error("Could not update account field")]
    UpdateFieldRejected,

    /// Request reached an authenticated route without an active session
    #[error("Session not found or expired")]
    SessionRequired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Credential hashing error
    #[error("Password hashing error: {0}")]
    Hashing(#[from] platform::password::PasswordHashError),

    /// Session payload (de)serialization error
    #[error("Session payload error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store error
    #[error("Session store error: {0}")]
    SessionStore(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidEmailFormat | AuthError::InvalidPasswordFormat => {
                StatusCode::BAD_REQUEST
            }
            AuthError::EmailExists => StatusCode::CONFLICT,
            AuthError::InvalidEmailPassword => StatusCode::UNAUTHORIZED,
            AuthError::UpdateFieldRejected => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::SessionRequired => StatusCode::UNAUTHORIZED,
            AuthError::Database(_)
            | AuthError::Hashing(_)
            | AuthError::Serialization(_)
            | AuthError::SessionStore(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidEmailFormat | AuthError::InvalidPasswordFormat => {
                ErrorKind::BadRequest
            }
            AuthError::EmailExists => ErrorKind::Conflict,
            AuthError::InvalidEmailPassword => ErrorKind::Unauthorized,
            AuthError::UpdateFieldRejected => ErrorKind::UnprocessableEntity,
            AuthError::SessionRequired => ErrorKind::Unauthorized,
            AuthError::Database(_)
            | AuthError::Hashing(_)
            | AuthError::Serialization(_)
            | AuthError::SessionStore(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this error is infrastructure failure rather than a
    /// classified validation/precondition result
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            AuthError::Database(_)
                | AuthError::Hashing(_)
                | AuthError::Serialization(_)
                | AuthError::SessionStore(_)
                | AuthError::Internal(_)
        )
    }

    /// Convert to AppError
    ///
    /// Infrastructure errors are rendered with a generic message so no
    /// collaborator detail leaks to clients.
    pub fn to_app_error(&self) -> AppError {
        if self.is_infrastructure() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(e) => {
                tracing::error!(error = %e, "Credential hashing error");
            }
            AuthError::Serialization(e) => {
                tracing::error!(error = %e, "Session payload error");
            }
            AuthError::SessionStore(msg) => {
                tracing::error!(message = %msg, "Session store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidEmailPassword => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_status_codes() {
        assert_eq!(
            AuthError::InvalidEmailFormat.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidEmailPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::UpdateFieldRejected.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_infrastructure_is_opaque() {
        let err = AuthError::Internal("pool exploded".to_string());
        assert!(err.is_infrastructure());

        let app = err.to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("pool exploded"));
    }

    #[test]
    fn test_classified_is_not_infrastructure() {
        assert!(!AuthError::EmailExists.is_infrastructure());
        assert!(!AuthError::InvalidEmailPassword.is_infrastructure());
    }
}
