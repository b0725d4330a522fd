use axum::extract::State;
use axum::response::Response;

use crate::api::fetch_products;
use crate::models::{AppState, ProductCard};
use crate::state::FetchController;
use crate::templates::{HomeTemplate, TemplateGlobals};
use crate::view::PageStatus;

use super::helpers::{render_page, status_code_for};

pub async fn home_get(State(state): State<AppState>) -> Response {
    let products = FetchController::new("home products");
    products.load(|| fetch_products(&state.catalog)).await;

    let fetched = products.state();
    let status = PageStatus::for_list(&fetched);
    let cards: Vec<ProductCard> = fetched
        .data()
        .map(|list| list.iter().map(ProductCard::from).collect())
        .unwrap_or_default();

    render_page(
        status_code_for(&status),
        HomeTemplate {
            globals: TemplateGlobals::from_state(&state),
            status,
            products: &cards,
        },
    )
}
