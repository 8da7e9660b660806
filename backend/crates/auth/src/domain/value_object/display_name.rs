//! Display Name Value Object

use kernel::error::app_error::AppResult;
use kernel::validate;
use serde::{Deserialize, Serialize};

pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Name shown next to posts and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();
        validate::length("display_name", &name, 1, Some(DISPLAY_NAME_MAX_LENGTH))?;
        Ok(Self(name))
    }

    pub fn from_stored(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_trimmed() {
        assert_eq!(DisplayName::new("  Ada ").unwrap().as_str(), "Ada");
    }

    #[test]
    fn test_display_name_bounds() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a".repeat(100)).is_ok());
        assert!(DisplayName::new("a".repeat(101)).is_err());
    }
}
