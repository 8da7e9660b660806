//! Infrastructure Layer

pub mod item_store;

pub use item_store::StorePortfolioRepository;
