//! Storage Crate - Persistence adapter
//!
//! One key-value table per entity. Items are JSON objects keyed by the
//! entity's identifier field.
//!
//! - [`ItemStore`]: get / scan / put / partial update / delete
//! - [`UpdateSet`]: named-attribute partial update builder
//! - [`PgItemStore`]: PostgreSQL JSONB backend
//! - [`MemoryItemStore`]: in-process backend
//! - [`Collection`]: typed view over one table

pub mod collection;
pub mod error;
pub mod item;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod update;

pub use collection::{Collection, Record};
pub use error::{StoreError, StoreResult};
pub use item::{Item, Table};
pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;
pub use store::{ItemStore, LocalItemStore};
pub use update::UpdateSet;
