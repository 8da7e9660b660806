//! Tables and items

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// A stored record: a JSON object carrying its table's key field
pub type Item = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Users,
    BlogPosts,
    Comments,
    Experiences,
    Projects,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Users,
        Table::BlogPosts,
        Table::Comments,
        Table::Experiences,
        Table::Projects,
    ];

    /// Physical table name
    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::BlogPosts => "blog_posts",
            Table::Comments => "comments",
            Table::Experiences => "experiences",
            Table::Projects => "projects",
        }
    }

    /// Attribute holding the item identifier
    pub fn key_field(&self) -> &'static str {
        match self {
            Table::Users => "user_id",
            Table::BlogPosts => "post_id",
            Table::Comments => "comment_id",
            Table::Experiences => "experience_id",
            Table::Projects => "project_id",
        }
    }

    /// Read the identifier out of an item
    pub fn key_of<'a>(&self, item: &'a Item) -> StoreResult<&'a str> {
        match item.get(self.key_field()) {
            Some(Value::String(id)) if !id.is_empty() => Ok(id),
            Some(_) => Err(StoreError::malformed(
                *self,
                format!("{} must be a non-empty string", self.key_field()),
            )),
            None => Err(StoreError::malformed(
                *self,
                format!("missing {}", self.key_field()),
            )),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_of() {
        let item = json!({ "post_id": "abc", "title": "Hello" });
        let item = item.as_object().unwrap();
        assert_eq!(Table::BlogPosts.key_of(item).unwrap(), "abc");
    }

    #[test]
    fn test_key_of_missing_or_wrong_type() {
        let missing = json!({ "title": "Hello" });
        assert!(Table::BlogPosts.key_of(missing.as_object().unwrap()).is_err());

        let numeric = json!({ "post_id": 7 });
        assert!(Table::BlogPosts.key_of(numeric.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = Table::ALL.iter().map(|t| t.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Table::ALL.len());
    }
}
