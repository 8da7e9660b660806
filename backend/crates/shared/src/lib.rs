//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for every stored entity
//! - Fixed-width UTC timestamps
//! - Field validation rules shared by request inputs
//! - A JSON body extractor that rejects with `AppError` (feature `axum`)
//!
//! Only things with a consistent meaning across all domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
pub mod time;
pub mod validate;
