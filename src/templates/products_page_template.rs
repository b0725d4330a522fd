use askama::Template;

use super::TemplateGlobals;
use crate::models::{FilterChip, ProductCard};
use crate::view::PageStatus;

/// Filterable product listing, used for both the full catalog and a single
/// category.
#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPageTemplate<'a> {
    pub globals: TemplateGlobals,
    pub heading: String,
    pub form_action: String,
    pub filter: String,
    pub sort_value: String,
    pub status: PageStatus,
    pub empty_message: String,
    pub result_summary: String,
    pub chips: &'a [FilterChip],
    pub products: &'a [ProductCard],
}
