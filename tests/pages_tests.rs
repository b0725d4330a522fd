mod support;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use shopfront::routes::build_router;
use support::{catalog_router, category_json, product_json, sample_catalog, spawn, Catalog};

async fn get_page(base_url: &str, uri: &str) -> (StatusCode, String) {
    let app = build_router(support::app_state(base_url));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Byte offset of `needle` in `body`, for ordering assertions.
fn position(body: &str, needle: &str) -> usize {
    body.find(needle).unwrap_or_else(|| panic!("{:?} not found in page", needle))
}

#[tokio::test]
async fn test_home_empty_catalog() {
    let base = spawn(catalog_router(Catalog::default())).await;
    let (status, body) = get_page(&base, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No products available at the moment"));
}

#[tokio::test]
async fn test_home_renders_cards() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Classic Red T-Shirt"));
    assert!(body.contains("Description of Classic Red T-Shirt"));
    assert!(body.contains("$24"));
    assert!(body.contains("/products/10"));
    assert!(!body.contains("No products available"));
}

#[tokio::test]
async fn test_products_default_sort_is_price_ascending() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (_, body) = get_page(&base, "/products").await;
    let shirt = position(&body, "Classic Red T-Shirt");
    let jacket = position(&body, "Denim Jacket");
    let phones = position(&body, "Wireless Headphones");
    assert!(shirt < jacket && jacket < phones);
    assert!(body.contains("Showing 3 of 3 products"));
}

#[tokio::test]
async fn test_products_sort_descending() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (_, body) = get_page(&base, "/products?sort=price-desc").await;
    assert!(position(&body, "Wireless Headphones") < position(&body, "Classic Red T-Shirt"));
}

#[tokio::test]
async fn test_products_filter_matches_category_name() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/products?q=elect").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Wireless Headphones"));
    assert!(!body.contains("Denim Jacket"));
    assert!(body.contains("Showing 1 of 3 products"));
}

#[tokio::test]
async fn test_products_filter_without_matches() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/products?q=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No products match your search criteria"));
}

#[tokio::test]
async fn test_products_category_chips() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (_, body) = get_page(&base, "/products").await;
    assert!(body.contains("q=Clothes"));
    assert!(body.contains("q=Electronics"));
}

#[tokio::test]
async fn test_product_detail() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/products/10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Classic Red T-Shirt"));
    assert!(body.contains("$24.00"));
    assert!(body.contains("2024-03-15"));
    assert!(body.contains("/category/clothes-1"));
    assert!(body.contains("product-10-a.jpeg"));
    assert!(body.contains("?image=1"));
}

#[tokio::test]
async fn test_product_detail_image_index_wraps() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (_, body) = get_page(&base, "/products/10?image=3").await;
    assert!(body.contains("product-10-b.jpeg"));
    assert!(body.contains("Image 2 of 2"));
}

#[tokio::test]
async fn test_product_detail_non_numeric_id_is_not_found() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/products/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("abc"));
}

#[tokio::test]
async fn test_product_detail_missing_product_is_not_found() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("role=\"alert\""));
    assert!(body.contains("with id 999"));
}

#[tokio::test]
async fn test_categories_page_links_slugs() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Product Categories"));
    assert!(body.contains("href=\"/category/clothes\""));
    assert!(body.contains("href=\"/category/electronics\""));
}

#[tokio::test]
async fn test_categories_page_empty() {
    let base = spawn(catalog_router(Catalog::default())).await;
    let (_, body) = get_page(&base, "/categories").await;
    assert!(body.contains("No categories available at the moment"));
}

#[tokio::test]
async fn test_category_products_page() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, body) = get_page(&base, "/category/electronics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Electronics</h1>"));
    assert!(body.contains("Wireless Headphones"));
    assert!(!body.contains("Classic Red T-Shirt"));
}

#[tokio::test]
async fn test_category_slug_with_spaces_in_name() {
    let mut catalog = sample_catalog();
    let garden = category_json(3, "Home & Garden");
    catalog.products.push(product_json(20, "Watering Can", 15.0, garden.clone()));
    catalog.categories.push(garden);
    let base = spawn(catalog_router(catalog)).await;

    let (status, body) = get_page(&base, "/category/home-garden").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Watering Can"));
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let base = spawn(catalog_router(sample_catalog())).await;
    let (status, _) = get_page(&base, "/category/garden-tools").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upstream_failure_renders_error_page() {
    let base = spawn(support::failing_router()).await;
    for uri in ["/", "/products", "/categories", "/category/clothes"] {
        let (status, body) = get_page(&base, uri).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY, "{}", uri);
        assert!(body.contains("Request failed with status code 500"), "{}", uri);
    }
}

#[tokio::test]
async fn test_unreachable_api_renders_error_page() {
    let base = support::closed_base_url().await;
    let (status, body) = get_page(&base, "/products").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_healthz_and_unknown_route() {
    let base = support::closed_base_url().await;
    let (status, body) = get_page(&base, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = get_page(&base, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stylesheet_is_served_with_cache_header() {
    let base = support::closed_base_url().await;
    let app = build_router(support::app_state(&base));
    let response = app
        .oneshot(Request::builder().uri("/static/styles.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    assert!(response.headers().contains_key(header::CACHE_CONTROL));
}

#[tokio::test]
async fn test_custom_stylesheet_override() {
    let base = support::closed_base_url().await;
    let mut state = support::app_state(&base);
    state.custom_css = Some("body { color: teal; }".to_string());
    let response = build_router(state)
        .oneshot(Request::builder().uri("/static/styles.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"body { color: teal; }");
}

#[tokio::test]
async fn test_product_detail_upstream_error_is_bad_gateway() {
    let base = spawn(support::failing_router()).await;
    let (status, _) = get_page(&base, "/products/10").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_categories_with_colliding_slugs_are_each_reachable() {
    let mut catalog = sample_catalog();
    let lookalike = category_json(7, "clothes!");
    catalog.products.push(product_json(70, "Only In Seven", 5.0, lookalike.clone()));
    catalog.categories.push(lookalike);
    let base = spawn(catalog_router(catalog)).await;

    let (_, index) = get_page(&base, "/categories").await;
    assert!(index.contains("href=\"/category/clothes\""));
    assert!(index.contains("href=\"/category/clothes-7\""));

    let (status, body) = get_page(&base, "/category/clothes-7").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Only In Seven"));
    assert!(!body.contains("Classic Red T-Shirt"));

    let (_, first) = get_page(&base, "/category/clothes").await;
    assert!(first.contains("Classic Red T-Shirt"));
    assert!(!first.contains("Only In Seven"));
}

#[tokio::test]
async fn test_category_with_symbol_only_name_gets_a_link() {
    let mut catalog = sample_catalog();
    let symbols = category_json(9, "???");
    catalog.products.push(product_json(90, "Mystery Box", 13.0, symbols.clone()));
    catalog.categories.push(symbols);
    let base = spawn(catalog_router(catalog)).await;

    let (_, index) = get_page(&base, "/categories").await;
    assert!(!index.contains("href=\"/category/\""));
    assert!(index.contains("href=\"/category/category-9\""));

    let (status, body) = get_page(&base, "/category/category-9").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Mystery Box"));
}

#[tokio::test]
async fn test_card_category_links_resolve_to_their_own_category() {
    let mut catalog = sample_catalog();
    let lookalike = category_json(7, "clothes!");
    catalog.products.push(product_json(70, "Only In Seven", 5.0, lookalike.clone()));
    catalog.categories.push(lookalike);
    let base = spawn(catalog_router(catalog)).await;

    let (_, body) = get_page(&base, "/products/70").await;
    assert!(body.contains("/category/clothes-7"));
    let (status, page) = get_page(&base, "/category/clothes-1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Classic Red T-Shirt"));
    assert!(!page.contains("Only In Seven"));
}
