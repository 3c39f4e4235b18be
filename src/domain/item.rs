//! To-do item documents and their identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::StoreError;

/// Store-generated identifier of an item document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        ItemId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = StoreError;

    /// Accepts only identifiers in the store's own format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(|id| ItemId(id.to_string()))
            .map_err(|_| StoreError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry. Never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Item {
            id: ItemId::generate(),
            name: name.into(),
        }
    }

    /// Copy of this item under a new id.
    pub fn duplicate(&self) -> Self {
        Item::new(self.name.clone())
    }
}
