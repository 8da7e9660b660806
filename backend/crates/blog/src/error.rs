//! Blog Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use storage::StoreError;
use thiserror::Error;

pub type BlogResult<T> = Result<T, BlogError>;

/// Display strings are the client-facing messages.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Blog post not found.")]
    PostNotFound,

    #[error("Comment not found.")]
    CommentNotFound,

    /// Neither the comment's author nor an admin
    #[error("You can only delete your own comments.")]
    NotCommentOwner,

    #[error("{0}")]
    Validation(AppError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl BlogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound | BlogError::CommentNotFound => ErrorKind::NotFound,
            BlogError::NotCommentOwner => ErrorKind::Forbidden,
            BlogError::Validation(e) => e.kind(),
            BlogError::Store(e) => e.to_app_error().kind(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            BlogError::Validation(e) => e.to_public(),
            BlogError::Store(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BlogError::Store(e) => {
                tracing::error!(error = %e, "Blog storage error");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        BlogError::Validation(err)
    }
}
