//! Typed view over one table

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::item::{Item, Table};
use crate::store::ItemStore;
use crate::update::UpdateSet;

/// A serde struct stored as one item; it must serialize its table's key field
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const TABLE: Table;
}

pub struct Collection<S, R> {
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<S: Clone, R> Clone for Collection<S, R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<S, R> Collection<S, R>
where
    S: ItemStore + Sync,
    R: Record,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<R>> {
        self.store
            .get(R::TABLE, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn scan(&self) -> StoreResult<Vec<R>> {
        self.store
            .scan(R::TABLE)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn scan_eq(&self, attribute: &str, value: impl Into<Value>) -> StoreResult<Vec<R>> {
        let value = value.into();
        self.store
            .scan_eq(R::TABLE, attribute, &value)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn put(&self, record: &R) -> StoreResult<()> {
        self.store.put(R::TABLE, encode(record)?).await
    }

    pub async fn update_fields(&self, id: &str, set: UpdateSet) -> StoreResult<Option<R>> {
        self.store
            .update_fields(R::TABLE, id, set)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.delete(R::TABLE, id).await
    }
}

fn encode<R: Record>(record: &R) -> StoreResult<Item> {
    match serde_json::to_value(record)? {
        Value::Object(item) => Ok(item),
        _ => Err(StoreError::malformed(R::TABLE, "record must serialize to an object")),
    }
}

fn decode<R: Record>(item: Item) -> StoreResult<R> {
    serde_json::from_value(Value::Object(item)).map_err(|e| {
        tracing::error!(table = %R::TABLE, error = %e, "Stored item does not match record");
        StoreError::malformed(R::TABLE, e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryItemStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Project {
        project_id: String,
        title: String,
        order: i64,
    }

    impl Record for Project {
        const TABLE: Table = Table::Projects;
    }

    fn project(id: &str, order: i64) -> Project {
        Project {
            project_id: id.to_string(),
            title: format!("Project {id}"),
            order,
        }
    }

    #[tokio::test]
    async fn test_typed_round_trip() {
        let projects = Collection::<_, Project>::new(MemoryItemStore::new());
        projects.put(&project("a", 1)).await.unwrap();

        assert_eq!(projects.get("a").await.unwrap(), Some(project("a", 1)));
        assert_eq!(projects.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_typed_update() {
        let projects = Collection::<_, Project>::new(MemoryItemStore::new());
        projects.put(&project("a", 1)).await.unwrap();

        let updated = projects
            .update_fields("a", UpdateSet::new().set("order", 5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.order, 5);
        assert_eq!(updated.title, "Project a");
    }

    #[tokio::test]
    async fn test_mismatched_item_is_malformed() {
        let store = MemoryItemStore::new();
        let item = serde_json::json!({ "project_id": "x", "title": 3 })
            .as_object()
            .cloned()
            .unwrap();
        store.put(Table::Projects, item).await.unwrap();

        let projects = Collection::<_, Project>::new(store);
        assert!(matches!(
            projects.get("x").await,
            Err(StoreError::MalformedItem { .. })
        ));
    }
}
