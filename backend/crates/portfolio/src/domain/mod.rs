//! Domain Layer

pub mod entity;
pub mod input;
pub mod repository;

pub use entity::{experience::Experience, project::Project};
pub use repository::{ExperienceRepository, ProjectRepository};
