//! Infrastructure Layer
//!
//! Repository implementations over the item store.

pub mod item_store;

pub use item_store::StoreUserRepository;
