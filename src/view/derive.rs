use std::fmt;
use std::str::FromStr;

use crate::models::Product;

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Parse a query-string value; anything unrecognized means the default.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

fn matches_filter(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle) || product.category.name.to_lowercase().contains(needle)
}

/// Filter by case-insensitive substring on title or category name, then sort
/// by price. The sort is stable, so equal prices keep their listing order.
pub fn derive_view(products: &[Product], filter: &str, sort: SortKey) -> Vec<Product> {
    let needle = filter.to_lowercase();
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches_filter(p, &needle))
        .cloned()
        .collect();
    match sort {
        SortKey::PriceAsc => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    view
}

/// Distinct category names in the order they first appear.
pub fn category_names(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for p in products {
        if !names.iter().any(|n| n == &p.category.name) {
            names.push(p.category.name.clone());
        }
    }
    names
}
