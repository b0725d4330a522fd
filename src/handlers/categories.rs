use axum::extract::{Path, Query, State};
use axum::response::Response;

use crate::api::{fetch_categories, fetch_products_by_category, find_by_slug, link_slugs};
use crate::models::{AppState, CategoryLink, Product};
use crate::state::{FetchController, FetchState};
use crate::templates::{CategoriesTemplate, TemplateGlobals};
use crate::view::PageStatus;

use super::helpers::{not_found, render_page, status_code_for};
use super::products::{render_listing, Listing, ListingQuery};

pub async fn categories_get(State(state): State<AppState>) -> Response {
    let categories = FetchController::new("categories");
    categories.load(|| fetch_categories(&state.catalog)).await;

    let fetched = categories.state();
    let status = PageStatus::for_list(&fetched);
    let links: Vec<CategoryLink> = fetched
        .data()
        .map(|list| {
            list.iter()
                .zip(link_slugs(list))
                .map(|(c, slug)| CategoryLink::new(c, slug))
                .collect()
        })
        .unwrap_or_default();

    render_page(
        status_code_for(&status),
        CategoriesTemplate {
            globals: TemplateGlobals::from_state(&state),
            status,
            categories: &links,
        },
    )
}

pub async fn category_products_get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let categories = FetchController::new("categories");
    categories.load(|| fetch_categories(&state.catalog)).await;

    let category = match categories.state() {
        FetchState::Success(list) => match find_by_slug(&list, &slug) {
            Some(category) => category.clone(),
            None => return not_found(&state, format!("There is no category named \"{}\".", slug)),
        },
        FetchState::Error(message) => {
            let failed: FetchState<Vec<Product>> = FetchState::Error(message);
            return render_listing(
                &state,
                Listing {
                    heading: "Category".into(),
                    form_action: format!("/category/{}", slug),
                    show_chips: false,
                },
                &failed,
                &query,
            );
        }
        FetchState::Idle | FetchState::Loading => {
            return render_listing(
                &state,
                Listing {
                    heading: "Category".into(),
                    form_action: format!("/category/{}", slug),
                    show_chips: false,
                },
                &FetchState::Loading,
                &query,
            );
        }
    };

    let products = FetchController::new("category products");
    products
        .load(|| fetch_products_by_category(&state.catalog, category.id))
        .await;

    render_listing(
        &state,
        Listing {
            heading: category.name.clone(),
            form_action: format!("/category/{}", slug),
            show_chips: false,
        },
        &products.state(),
        &query,
    )
}
