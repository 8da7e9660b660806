//! Blog Backend Module
//!
//! Blog posts (admin authored, public or draft) and the comments readers
//! leave on them.
//!
//! - `domain/` - Entities, validated inputs, repository traits
//! - `application/` - Post and comment services
//! - `infra/` - Item store implementations
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{BlogError, BlogResult};
pub use infra::item_store::StoreBlogRepository;
pub use presentation::router::blog_router;
