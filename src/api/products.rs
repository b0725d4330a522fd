use crate::models::Product;

use super::client::CatalogClient;
use super::mapper::{map_product, map_products};
use super::result::FetchResult;

/// Load the full product listing.
pub async fn fetch_products(catalog: &CatalogClient) -> FetchResult<Vec<Product>> {
    let result = catalog.get("/products").await.and_then(|payload| map_products(&payload));
    if let Some(list) = result.data() {
        tracing::debug!(count = list.len(), "Loaded products");
    }
    result
}

/// Load a single product by id.
pub async fn fetch_product(catalog: &CatalogClient, id: u64) -> FetchResult<Product> {
    let endpoint = format!("/products/{}", id);
    catalog.get(&endpoint).await.and_then(|payload| map_product(&payload))
}

/// Load the products filed under one category.
pub async fn fetch_products_by_category(catalog: &CatalogClient, category_id: u64) -> FetchResult<Vec<Product>> {
    let params = [("categoryId", category_id.to_string())];
    catalog
        .get_with_query("/products", &params)
        .await
        .and_then(|payload| map_products(&payload))
}
