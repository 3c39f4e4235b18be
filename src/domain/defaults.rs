//! Placeholder items seeded into an empty collection or a new list.

use super::item::Item;

pub const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your to-do list",
    "Hit the + button to add a new item",
    "<-- Hit this to delete an item",
];

/// Fresh placeholder items; every call yields new ids.
pub fn default_items() -> Vec<Item> {
    DEFAULT_ITEM_NAMES.iter().map(|name| Item::new(*name)).collect()
}
