//! Application Layer

pub mod experience_service;
pub mod project_service;

pub use experience_service::ExperienceService;
pub use project_service::ProjectService;
