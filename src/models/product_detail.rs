use crate::models::Product;
use crate::utils::{format_price_fixed, format_timestamp};
use crate::view::ImageCarousel;

/// Display-ready fields for the product detail page.
#[derive(Debug, Clone, Default)]
pub struct ProductDetail {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub category_name: String,
    pub category_slug: String,
    pub listed_on: String,
    pub image_url: String,
    pub image_position: String,
    pub has_image_controls: bool,
    pub prev_image_href: String,
    pub next_image_href: String,
}

impl ProductDetail {
    pub fn new(product: &Product, carousel: ImageCarousel) -> Self {
        let href = |index: usize| format!("/products/{}?image={}", product.id, index);
        let image_url = product
            .images
            .get(carousel.index())
            .cloned()
            .unwrap_or_default();
        let image_position = if carousel.is_empty() {
            String::new()
        } else {
            format!("Image {} of {}", carousel.index() + 1, carousel.len())
        };
        ProductDetail {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price_label: format_price_fixed(product.price),
            category_name: product.category.name.clone(),
            category_slug: product.category.unique_slug(),
            listed_on: format_timestamp(&product.creation_at),
            image_url,
            image_position,
            has_image_controls: carousel.has_controls(),
            prev_image_href: href(carousel.prev()),
            next_image_href: href(carousel.next()),
        }
    }
}
