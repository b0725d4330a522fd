use crate::models::Product;
use crate::utils::format_price;

/// Display-ready product fields for list templates.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub category_name: String,
    pub category_slug: String,
    pub image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        ProductCard {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            price_label: format_price(p.price),
            category_name: p.category.name.clone(),
            category_slug: p.category.unique_slug(),
            image_url: p.primary_image().unwrap_or_default().to_string(),
        }
    }
}
