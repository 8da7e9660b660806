//! PostgreSQL item store
//!
//! Each table is `(id TEXT PRIMARY KEY, item JSONB NOT NULL)`. Partial
//! updates merge with `||` in a single statement, so concurrent writers
//! never lose attributes they did not touch.

use std::time::Duration;

use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;

use crate::error::StoreResult;
use crate::item::{Item, Table};
use crate::store::ItemStore;
use crate::update::UpdateSet;

#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Create a pool that connects on first use
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

impl ItemStore for PgItemStore {
    async fn get(&self, table: Table, id: &str) -> StoreResult<Option<Item>> {
        let item = sqlx::query_scalar::<_, Json<Item>>(&format!(
            "SELECT item FROM {} WHERE id = $1",
            table.name()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item.map(|Json(item)| item))
    }

    async fn scan(&self, table: Table) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_scalar::<_, Json<Item>>(&format!(
            "SELECT item FROM {} ORDER BY id",
            table.name()
        ))
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(table = %table, count = items.len(), "Scanned table");

        Ok(items.into_iter().map(|Json(item)| item).collect())
    }

    async fn scan_eq(
        &self,
        table: Table,
        attribute: &str,
        value: &Value,
    ) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_scalar::<_, Json<Item>>(&format!(
            "SELECT item FROM {} WHERE item -> $1::text = $2 ORDER BY id",
            table.name()
        ))
        .bind(attribute)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await?;

        Ok(items.into_iter().map(|Json(item)| item).collect())
    }

    async fn put(&self, table: Table, item: Item) -> StoreResult<()> {
        let id = table.key_of(&item)?.to_string();

        sqlx::query(&format!(
            r#"
            INSERT INTO {} (id, item) VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET item = EXCLUDED.item
            "#,
            table.name()
        ))
        .bind(&id)
        .bind(Json(&item))
        .execute(&self.pool)
        .await?;

        tracing::debug!(table = %table, id = %id, "Item stored");

        Ok(())
    }

    async fn update_fields(
        &self,
        table: Table,
        id: &str,
        set: UpdateSet,
    ) -> StoreResult<Option<Item>> {
        let set = set.for_table(table);
        if set.is_empty() {
            return self.get(table, id).await;
        }

        let item = sqlx::query_scalar::<_, Json<Item>>(&format!(
            "UPDATE {} SET item = item || $2 WHERE id = $1 RETURNING item",
            table.name()
        ))
        .bind(id)
        .bind(Json(set.into_fields()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(item.map(|Json(item)| item))
    }

    async fn delete(&self, table: Table, id: &str) -> StoreResult<bool> {
        let deleted = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table.name()))
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
