//! Storage Error Types

use kernel::error::app_error::AppError;
use thiserror::Error;

use crate::item::Table;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure (connection, query, constraint)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Item could not be converted to or from a record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored or submitted item does not have the expected shape
    #[error("Malformed item in {table}: {reason}")]
    MalformedItem { table: Table, reason: String },
}

impl StoreError {
    pub fn malformed(table: Table, reason: impl Into<String>) -> Self {
        StoreError::MalformedItem {
            table,
            reason: reason.into(),
        }
    }

    /// Whether retrying later may succeed
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }

    /// Client-facing error; details stay in the logs
    pub fn to_app_error(&self) -> AppError {
        if self.is_unavailable() {
            AppError::service_unavailable("Storage is temporarily unavailable")
        } else {
            AppError::internal("Storage operation failed")
        }
    }
}
