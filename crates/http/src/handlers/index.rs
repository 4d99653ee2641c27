//! Landing page: embedded HTML form listing every known destination.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::fmt::Write;
use std::sync::Arc;

use crate::AppState;

const INDEX_TEMPLATE: &str = include_str!("../index.html");
const OPTIONS_PLACEHOLDER: &str = "{{destination_options}}";

/// `GET /`
pub async fn serve_index(State(state): State<Arc<AppState>>) -> Response {
    let page = render_index(state.recommendations.destinations());
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(page))
        .into_response()
}

pub fn render_index(destinations: &[String]) -> String {
    let mut options = String::new();
    for name in destinations {
        let value = html_escape::encode_double_quoted_attribute(name);
        let text = html_escape::encode_text(name);
        let _ = writeln!(options, "      <option value=\"{value}\">{text}</option>");
    }
    INDEX_TEMPLATE.replace(OPTIONS_PLACEHOLDER, options.trim_end())
}
