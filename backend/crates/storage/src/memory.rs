//! In-memory item store
//!
//! Used by tests and when no database is configured. State lives only as
//! long as the process.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::item::{Item, Table};
use crate::store::ItemStore;
use crate::update::UpdateSet;

type Tables = HashMap<Table, BTreeMap<String, Item>>;

#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for MemoryItemStore {
    async fn get(&self, table: Table, id: &str) -> StoreResult<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.get(&table).and_then(|rows| rows.get(id)).cloned())
    }

    async fn scan(&self, table: Table) -> StoreResult<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&table)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn scan_eq(
        &self,
        table: Table,
        attribute: &str,
        value: &Value,
    ) -> StoreResult<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&table)
            .map(|rows| {
                rows.values()
                    .filter(|item| item.get(attribute) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn put(&self, table: Table, item: Item) -> StoreResult<()> {
        let id = table.key_of(&item)?.to_string();
        let mut tables = self.tables.write().await;
        tables.entry(table).or_default().insert(id, item);
        Ok(())
    }

    async fn update_fields(
        &self,
        table: Table,
        id: &str,
        set: UpdateSet,
    ) -> StoreResult<Option<Item>> {
        let set = set.for_table(table);
        let mut tables = self.tables.write().await;

        let Some(item) = tables.get_mut(&table).and_then(|rows| rows.get_mut(id)) else {
            return Ok(None);
        };

        set.apply_to(item);
        Ok(Some(item.clone()))
    }

    async fn delete(&self, table: Table, id: &str) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .get_mut(&table)
            .is_some_and(|rows| rows.remove(id).is_some()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
