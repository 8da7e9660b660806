//! Portfolio Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use storage::StoreError;
use thiserror::Error;

pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Experience not found.")]
    ExperienceNotFound,

    #[error("Project not found.")]
    ProjectNotFound,

    #[error("{0}")]
    Validation(AppError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl PortfolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortfolioError::ExperienceNotFound | PortfolioError::ProjectNotFound => {
                ErrorKind::NotFound
            }
            PortfolioError::Validation(e) => e.kind(),
            PortfolioError::Store(e) => e.to_app_error().kind(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            PortfolioError::Validation(e) => e.to_public(),
            PortfolioError::Store(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            PortfolioError::Store(e) => {
                tracing::error!(error = %e, "Portfolio storage error");
            }
            _ => {
                tracing::debug!(error = %self, "Portfolio error");
            }
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PortfolioError {
    fn from(err: AppError) -> Self {
        PortfolioError::Validation(err)
    }
}
