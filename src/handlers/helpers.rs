use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::AppState;
use crate::templates::{NotFoundTemplate, TemplateGlobals};
use crate::view::PageStatus;

/// Pages whose fetch failed answer 502; everything else renders as 200.
pub fn status_code_for(status: &PageStatus) -> StatusCode {
    if status.is_error() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    }
}

pub fn render_page<T: Template>(code: StatusCode, t: T) -> Response {
    match t.render() {
        Ok(body) => (code, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn not_found(state: &AppState, message: impl Into<String>) -> Response {
    render_page(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            globals: TemplateGlobals::from_state(state),
            message: message.into(),
        },
    )
}
