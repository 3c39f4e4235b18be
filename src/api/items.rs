//! Handlers for the default "Today" list.
//!
//! Store failures are logged and never shown to the user: every mutating
//! handler redirects back to `/` whether or not the write succeeded.

use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::api::{AppState, TODAY_TITLE};
use crate::domain::default_items;
use crate::views::{render_list, ListView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemForm {
    #[serde(default)]
    pub new_item: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemForm {
    #[serde(default)]
    pub check_box: String,
}

/// GET `/`: seed the placeholders into an empty collection, otherwise render it.
///
/// Seeding always ends in a redirect so the follow-up GET observes the stored state.
pub async fn get_today(State(state): State<AppState>) -> Response {
    let items = match state.items.find_all().await {
        Ok(items) => items,
        Err(e) => {
            error!(error = %e, "Failed to load items");
            return Html(render_list(&ListView::new(TODAY_TITLE, Vec::new()))).into_response();
        }
    };

    if items.is_empty() {
        match state.items.insert_many(&default_items()).await {
            Ok(()) => info!("Seeded default items"),
            Err(e) => error!(error = %e, "Failed to seed default items"),
        }
        return Redirect::to("/").into_response();
    }

    Html(render_list(&ListView::new(TODAY_TITLE, items))).into_response()
}

/// POST `/`: store `newItem` verbatim, then redirect to `/`.
pub async fn add_item(State(state): State<AppState>, Form(form): Form<NewItemForm>) -> Redirect {
    match state.items.insert_one(&form.new_item).await {
        Ok(item) => info!(id = %item.id, "Added item"),
        Err(e) => error!(name = %form.new_item, error = %e, "Failed to add item"),
    }
    Redirect::to("/")
}

/// POST `/delete`: remove the item named by `checkBox`, then redirect to `/`.
pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> Redirect {
    match state.items.delete_by_id(&form.check_box).await {
        Ok(true) => info!(id = %form.check_box, "Deleted item"),
        Ok(false) => warn!(id = %form.check_box, "No item to delete"),
        Err(e) => error!(id = %form.check_box, error = %e, "Failed to delete item"),
    }
    Redirect::to("/")
}
