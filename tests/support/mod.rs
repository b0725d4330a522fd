//! Stub catalog API served on an ephemeral port.
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use shopfront::api::CatalogClient;
use shopfront::models::AppState;

#[derive(Clone, Default)]
pub struct Catalog {
    pub products: Vec<Value>,
    pub categories: Vec<Value>,
}

pub fn category_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "image": format!("https://i.imgur.com/category-{}.jpeg", id),
        "creationAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn product_json(id: u64, title: &str, price: f64, category: Value) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "price": price,
        "description": format!("Description of {}", title),
        "images": [
            format!("https://i.imgur.com/product-{}-a.jpeg", id),
            format!("https://i.imgur.com/product-{}-b.jpeg", id)
        ],
        "category": category,
        "creationAt": "2024-03-15T10:20:30.000Z",
        "updatedAt": "2024-03-16T10:20:30.000Z"
    })
}

/// Two categories and three products, listed out of price order.
pub fn sample_catalog() -> Catalog {
    let clothes = category_json(1, "Clothes");
    let electronics = category_json(2, "Electronics");
    Catalog {
        products: vec![
            product_json(10, "Classic Red T-Shirt", 24.0, clothes.clone()),
            product_json(11, "Wireless Headphones", 99.5, electronics.clone()),
            product_json(12, "Denim Jacket", 60.0, clothes.clone()),
        ],
        categories: vec![clothes, electronics],
    }
}

async fn list_products(State(catalog): State<Catalog>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let wanted = params.get("categoryId").and_then(|raw| raw.parse::<u64>().ok());
    let products = catalog
        .products
        .into_iter()
        .filter(|p| match wanted {
            Some(id) => p["category"]["id"].as_u64() == Some(id),
            None => true,
        })
        .collect::<Vec<_>>();
    Json(Value::Array(products))
}

async fn get_product(State(catalog): State<Catalog>, Path(id): Path<String>) -> Response {
    let found = id
        .parse::<u64>()
        .ok()
        .and_then(|id| catalog.products.into_iter().find(|p| p["id"].as_u64() == Some(id)));
    match found {
        Some(product) => Json(product).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "name": "EntityNotFoundError",
                "message": format!("Could not find any entity of type \"Product\" with id {}", id)
            })),
        )
            .into_response(),
    }
}

async fn list_categories(State(catalog): State<Catalog>) -> Json<Value> {
    Json(Value::Array(catalog.categories))
}

pub fn catalog_router(catalog: Catalog) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/categories", get(list_categories))
        .with_state(catalog)
}

/// Every endpoint answers 500 with an empty JSON body.
pub fn failing_router() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) })
}

/// Serve `router` on 127.0.0.1 with an OS-assigned port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client(base_url: &str) -> CatalogClient {
    shopfront::api::set_silent(true);
    CatalogClient::new(base_url, Duration::from_secs(5)).unwrap()
}

pub fn app_state(base_url: &str) -> AppState {
    AppState {
        catalog: client(base_url),
        custom_css: None,
    }
}
