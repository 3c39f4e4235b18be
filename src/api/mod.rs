pub mod about;
pub mod items;
pub mod lists;

use crate::db::{ItemRepository, ListRepository};
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Title of the default list rendered at `/`.
pub const TODAY_TITLE: &str = "Today";

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemRepository>,
    pub lists: Arc<ListRepository>,
}

impl AppState {
    pub fn new(items: Arc<ItemRepository>, lists: Arc<ListRepository>) -> Self {
        Self { items, lists }
    }

    /// Both repositories over one shared pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(ItemRepository::new(pool.clone())),
            Arc::new(ListRepository::new(pool)),
        )
    }
}

/// Build the application router.
///
/// Static paths always win over the single-segment `/:custom_list_name`
/// route, so `/about` and `/delete` are never treated as list names. Page
/// routes also answer with one trailing slash.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(items::get_today).post(items::add_item))
        .route("/delete", post(items::delete_item))
        .route("/about", get(about::get_about))
        .route("/about/", get(about::get_about))
        .route("/:custom_list_name", get(lists::get_custom_list))
        .route("/:custom_list_name/", get(lists::get_custom_list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
