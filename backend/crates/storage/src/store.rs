//! Item store trait

use serde_json::Value;

use crate::error::StoreResult;
use crate::item::{Item, Table};
use crate::update::UpdateSet;

/// Key-value table access shared by every backend
#[trait_variant::make(ItemStore: Send)]
pub trait LocalItemStore {
    /// Fetch one item by identifier
    async fn get(&self, table: Table, id: &str) -> StoreResult<Option<Item>>;

    /// All items of a table, in no particular order
    async fn scan(&self, table: Table) -> StoreResult<Vec<Item>>;

    /// Items whose `attribute` equals `value` (full scan, not indexed)
    async fn scan_eq(&self, table: Table, attribute: &str, value: &Value)
    -> StoreResult<Vec<Item>>;

    /// Insert or replace an item; the key is read from the item itself
    async fn put(&self, table: Table, item: Item) -> StoreResult<()>;

    /// Replace only the named attributes and return the full item
    ///
    /// An empty set returns the current item unchanged. Returns `None` when
    /// the item does not exist; no item is created.
    async fn update_fields(
        &self,
        table: Table,
        id: &str,
        set: UpdateSet,
    ) -> StoreResult<Option<Item>>;

    /// Returns whether an item was removed
    async fn delete(&self, table: Table, id: &str) -> StoreResult<bool>;

    /// Cheap round trip used by the readiness probe
    async fn ping(&self) -> StoreResult<()>;
}
