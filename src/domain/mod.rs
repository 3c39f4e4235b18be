//! Domain types for the to-do store.
//!
//! This module provides:
//! - `Item` / `ItemId`: entries of the default collection and embedded list entries
//! - `TodoList` / `ListId`: named lists
//! - The three placeholder items used for seeding

pub mod defaults;
pub mod item;
pub mod list;

pub use defaults::{default_items, DEFAULT_ITEM_NAMES};
pub use item::{Item, ItemId};
pub use list::{ListId, TodoList};
