//! Repository layer for the document store.
//!
//! One repository per collection:
//! - `items.rs` - the default item collection
//! - `lists.rs` - named lists with embedded items

mod items;
mod lists;

pub use items::ItemRepository;
pub use lists::ListRepository;
