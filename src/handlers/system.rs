use axum::extract::State;
use axum::response::Response;

use crate::models::AppState;

use super::helpers::not_found;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn not_found_fallback(State(state): State<AppState>) -> Response {
    not_found(&state, "The page you are looking for does not exist.")
}
