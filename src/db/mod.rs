//! SQLite-backed document store.
//!
//! This module provides:
//! - Database initialization and migrations
//! - `ItemRepository` over the default item collection
//! - `ListRepository` over named lists

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::{ItemRepository, ListRepository};
