//! Partial update builder
//!
//! An [`UpdateSet`] names the attributes to replace and their new values.
//! Attributes not named are left untouched by the store.

use serde::Serialize;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::item::{Item, Table};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    fields: Item,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a partial input struct
    ///
    /// `null` fields (absent `Option`s) are dropped.
    pub fn from_partial<T: Serialize>(table: Table, partial: &T) -> StoreResult<Self> {
        match serde_json::to_value(partial)? {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
            }),
            other => Err(StoreError::malformed(
                table,
                format!("partial update must be an object, got {other}"),
            )),
        }
    }

    /// Add or override one attribute
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Remove the table's key field; identifiers are never reassigned
    pub fn for_table(mut self, table: Table) -> Self {
        self.fields.remove(table.key_field());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Merge into an existing item in place
    pub fn apply_to(&self, item: &mut Item) {
        for (name, value) in &self.fields {
            item.insert(name.clone(), value.clone());
        }
    }

    pub fn into_fields(self) -> Item {
        self.fields
    }
}
