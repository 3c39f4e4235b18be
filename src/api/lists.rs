//! Handler for user-created lists addressed by `/:custom_list_name`.

use axum::extract::{OriginalUri, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{error, info};

use crate::api::AppState;
use crate::domain::default_items;
use crate::views::{render_list, ListView};

/// GET `/:custom_list_name`: render the list, creating it first if it is new.
///
/// Lookup and insert are separate store calls, so two first visits racing
/// on the same name can both create a list. A newly created list is never
/// rendered in the same request; the client is redirected back to the
/// original path, minus any trailing slash.
pub async fn get_custom_list(
    State(state): State<AppState>,
    Path(custom_list_name): Path<String>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    match state.lists.find_by_name(&custom_list_name).await {
        Ok(Some(list)) => {
            info!(list = %list.name, "List already exists");
            Html(render_list(&ListView::new(list.name, list.items))).into_response()
        }
        Ok(None) => {
            info!(list = %custom_list_name, "No such list found, creating it");
            if let Err(e) = state
                .lists
                .insert_one(&custom_list_name, &default_items())
                .await
            {
                error!(list = %custom_list_name, error = %e, "Failed to create list");
            }
            let path = uri.path();
            Redirect::to(path.strip_suffix('/').unwrap_or(path)).into_response()
        }
        Err(e) => {
            error!(list = %custom_list_name, error = %e, "Failed to look up list");
            Html(render_list(&ListView::new(custom_list_name, Vec::new()))).into_response()
        }
    }
}
