//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::PortfolioAppState;
pub use router::{experience_router, project_router};
