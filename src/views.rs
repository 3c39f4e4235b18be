//! Server-side HTML rendering.
//!
//! Item and list names are stored verbatim and only escaped here, at render time.

use serde::Serialize;
use std::fmt::Write;

use crate::domain::Item;

/// Model handed to the list page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub list_title: String,
    pub new_list_items: Vec<Item>,
}

impl ListView {
    pub fn new(list_title: impl Into<String>, new_list_items: Vec<Item>) -> Self {
        ListView {
            list_title: list_title.into(),
            new_list_items,
        }
    }
}

const STYLE: &str = r#"<style>
body { font-family: sans-serif; background: #e4e9fd; }
.box { max-width: 400px; margin: 40px auto; background: #fff; box-shadow: 5px 5px 15px -5px rgba(0,0,0,0.3); }
#heading { background: #a683e3; text-align: center; padding: 10px; color: #fff; }
.item { display: flex; align-items: center; border-bottom: 1px solid #f1f1f1; min-height: 60px; }
.item p { margin: 0; padding: 20px; font-size: 20px; }
form.item { padding-left: 20px; }
input[type="text"] { flex: 1; border: none; font-size: 20px; padding: 10px; }
button { width: 50px; height: 50px; border-radius: 50%; font-size: 30px; background: #a683e3; color: #fff; border: none; }
</style>"#;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>To-Do List</title>\n{}\n</head>\n<body>\n<div class=\"box\" id=\"heading\">\n<h1>{}</h1>\n</div>\n{}\n</body>\n</html>\n",
        STYLE,
        escape_html(title),
        body
    )
}

/// Render a list page: one row per item with a delete checkbox, then the add form.
pub fn render_list(view: &ListView) -> String {
    let mut body = String::from("<div class=\"box\">\n");

    for item in &view.new_list_items {
        // Writing into a String cannot fail
        let _ = write!(
            body,
            "<form action=\"/delete\" method=\"post\">\n<div class=\"item\">\n<input type=\"checkbox\" name=\"checkBox\" value=\"{}\" onChange=\"this.form.submit()\">\n<p>{}</p>\n</div>\n</form>\n",
            escape_html(item.id.as_str()),
            escape_html(&item.name)
        );
    }

    let _ = write!(
        body,
        "<form class=\"item\" action=\"/\" method=\"post\">\n<input type=\"text\" name=\"newItem\" placeholder=\"New Item\" autocomplete=\"off\">\n<button type=\"submit\" name=\"list\" value=\"{}\">+</button>\n</form>\n</div>",
        escape_html(&view.list_title)
    );

    page(&view.list_title, &body)
}

/// Render the static about page.
pub fn render_about() -> String {
    page(
        "About",
        "<div class=\"box\">\n<p>A small to-do list: a default list for today, plus any list you open by visiting <code>/&lt;name&gt;</code>.</p>\n<p><a href=\"/\">Back to Today</a></p>\n</div>",
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
