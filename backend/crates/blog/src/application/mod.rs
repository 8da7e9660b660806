//! Application Layer

pub mod comment_service;
pub mod post_service;

pub use comment_service::CommentService;
pub use post_service::PostService;
