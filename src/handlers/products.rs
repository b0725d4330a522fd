use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;

use crate::api::{fetch_product, fetch_products};
use crate::models::{AppState, FilterChip, Product, ProductCard, ProductDetail};
use crate::state::{FetchController, FetchState};
use crate::templates::{ProductDetailTemplate, ProductsPageTemplate, TemplateGlobals};
use crate::utils::with_query;
use crate::view::{category_names, derive_view, ImageCarousel, PageStatus, SortKey};

use super::helpers::{not_found, render_page, status_code_for};

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub q: String,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub image: Option<String>,
}

/// Listing page parameters that differ between the catalog and category views.
pub struct Listing {
    pub heading: String,
    pub form_action: String,
    pub show_chips: bool,
}

pub async fn products_get(State(state): State<AppState>, Query(query): Query<ListingQuery>) -> Response {
    let products = FetchController::new("products");
    products.load(|| fetch_products(&state.catalog)).await;

    render_listing(
        &state,
        Listing {
            heading: "All Products".into(),
            form_action: "/products".into(),
            show_chips: true,
        },
        &products.state(),
        &query,
    )
}

/// Render a filtered, sorted listing from whatever state the fetch ended in.
pub fn render_listing(
    state: &AppState,
    listing: Listing,
    fetched: &FetchState<Vec<Product>>,
    query: &ListingQuery,
) -> Response {
    let sort = SortKey::from_query(query.sort.as_deref());
    let derived = match fetched {
        FetchState::Success(all) => FetchState::Success(derive_view(all, &query.q, sort)),
        other => other.clone(),
    };
    let status = PageStatus::for_list(&derived);

    let total = fetched.data().map_or(0, Vec::len);
    let empty_message = if total == 0 {
        "No products available at the moment"
    } else {
        "No products match your search criteria"
    };

    let chips: Vec<FilterChip> = match fetched.data() {
        Some(all) if listing.show_chips => category_names(all)
            .into_iter()
            .map(|name| FilterChip {
                href: with_query(&listing.form_action, &[("q", name.as_str()), ("sort", sort.as_str())]),
                active: name.eq_ignore_ascii_case(query.q.trim()),
                label: name,
            })
            .collect(),
        _ => Vec::new(),
    };

    let cards: Vec<ProductCard> = derived
        .data()
        .map(|list| list.iter().map(ProductCard::from).collect())
        .unwrap_or_default();

    render_page(
        status_code_for(&status),
        ProductsPageTemplate {
            globals: TemplateGlobals::from_state(state),
            result_summary: format!("Showing {} of {} products", cards.len(), total),
            heading: listing.heading,
            form_action: listing.form_action,
            filter: query.q.clone(),
            sort_value: sort.as_str().to_string(),
            status,
            empty_message: empty_message.to_string(),
            chips: &chips,
            products: &cards,
        },
    )
}

pub async fn product_detail_get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let id = match raw_id.trim().parse::<u64>() {
        Ok(id) if id > 0 => id,
        _ => return not_found(&state, format!("There is no product with id \"{}\".", raw_id)),
    };
    let requested_image = query
        .image
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let product = FetchController::new("product");
    let mut upstream_status = None;
    let status_slot = &mut upstream_status;
    let catalog = &state.catalog;
    product
        .load(move || async move {
            let result = fetch_product(catalog, id).await;
            *status_slot = result.status();
            result
        })
        .await;

    let fetched = product.state();
    let status = PageStatus::for_item(&fetched);
    // The catalog answered; it just has no such product.
    let code = if upstream_status == Some(404) {
        StatusCode::NOT_FOUND
    } else {
        status_code_for(&status)
    };
    let detail = fetched
        .data()
        .map(|p| ProductDetail::new(p, ImageCarousel::new(p.images.len(), requested_image)))
        .unwrap_or_default();

    render_page(
        code,
        ProductDetailTemplate {
            globals: TemplateGlobals::from_state(&state),
            status,
            product: detail,
        },
    )
}
