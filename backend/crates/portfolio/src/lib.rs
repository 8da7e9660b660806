//! Portfolio Backend Module
//!
//! Work experience and project entries shown on the portfolio pages.
//! Both are admin-managed and listed by their display `order`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{PortfolioError, PortfolioResult};
pub use infra::item_store::StorePortfolioRepository;
pub use presentation::router::{experience_router, project_router};

#[cfg(test)]
mod tests;
