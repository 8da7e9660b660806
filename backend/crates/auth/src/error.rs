//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use storage::StoreError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Display strings are the client-facing messages.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already registered
    #[error("User with this email already exists.")]
    DuplicateUser,

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// No token in cookie or Authorization header
    #[error("Not authenticated.")]
    NotAuthenticated,

    /// Bad signature, malformed token or past expiry
    #[error("Invalid or expired token.")]
    InvalidOrExpiredToken,

    /// Authenticated but lacking the admin role
    #[error("Admin access required.")]
    Forbidden,

    #[error("User not found.")]
    UserNotFound,

    /// Malformed input
    #[error("{0}")]
    Validation(AppError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateUser => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::InvalidOrExpiredToken => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Validation(e) => e.kind(),
            AuthError::Store(e) => e.to_app_error().kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(e) => e.to_public(),
            AuthError::Store(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Store(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidOrExpiredToken => {
                tracing::warn!("Rejected invalid or expired token");
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
        if err.is_server_error() {
            AuthError::Internal(err.to_string())
        } else {
            AuthError::Validation(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::DuplicateUser.kind().status_code(), 409);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::NotAuthenticated.kind().status_code(), 401);
        assert_eq!(AuthError::InvalidOrExpiredToken.kind().status_code(), 401);
        assert_eq!(AuthError::Forbidden.kind().status_code(), 403);
        assert_eq!(AuthError::UserNotFound.kind().status_code(), 404);
        assert_eq!(
            AuthError::from(AppError::bad_request("email must not be empty"))
                .kind()
                .status_code(),
            400
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_app_error().message(),
            "Invalid email or password."
        );
        assert_eq!(
            AuthError::Forbidden.to_app_error().message(),
            "Admin access required."
        );
    }

    #[test]
    fn test_internal_errors_are_not_validation() {
        let err = AuthError::from(AppError::internal("hash failure"));
        assert!(matches!(err, AuthError::Internal(_)));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
    }
}
