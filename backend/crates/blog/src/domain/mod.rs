//! Domain Layer

pub mod entity;
pub mod input;
pub mod repository;

pub use entity::{comment::Comment, post::BlogPost};
pub use repository::{CommentRepository, PostRepository};
