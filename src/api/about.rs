use axum::response::Html;

use crate::views::render_about;

pub async fn get_about() -> Html<String> {
    Html(render_about())
}
