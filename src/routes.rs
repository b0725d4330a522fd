use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let static_routes: Router<AppState> = Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(handlers::home::home_get))
        .route("/products", get(handlers::products::products_get))
        .route("/products/:id", get(handlers::products::product_detail_get))
        .route("/categories", get(handlers::categories::categories_get))
        .route("/category/:slug", get(handlers::categories::category_products_get))
        .route("/healthz", get(handlers::system::healthz))
        .merge(static_routes)
        .fallback(handlers::system::not_found_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
