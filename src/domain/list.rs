//! Named, user-created lists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::Item;

/// Store-generated identifier of a list document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub fn generate() -> Self {
        ListId(Uuid::new_v4().to_string())
    }

    pub fn from_stored(raw: String) -> Self {
        ListId(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A list keyed by its name in the URL, holding embedded copies of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<Item>,
}
