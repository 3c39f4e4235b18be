pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod views;

pub use config::Config;
pub use db::{init_db, ItemRepository, ListRepository};
pub use domain::{Item, ItemId, ListId, TodoList};
pub use error::StoreError;
