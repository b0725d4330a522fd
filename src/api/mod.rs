// Atomic API modules
pub mod client;
pub mod error;
pub mod result;
pub mod mapper;
pub mod products;
pub mod categories;

// Re-export commonly used items
pub use client::{set_silent, CatalogClient};
pub use error::{FetchError, UNEXPECTED_ERROR};
pub use result::FetchResult;
pub use mapper::{map_categories, map_category, map_product, map_products};
pub use products::{fetch_product, fetch_products, fetch_products_by_category};
pub use categories::{fetch_categories, find_by_slug, link_slugs};
