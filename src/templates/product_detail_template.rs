use askama::Template;

use super::TemplateGlobals;
use crate::models::ProductDetail;
use crate::view::PageStatus;

#[derive(Template)]
#[template(path = "product_detail.html")]
pub struct ProductDetailTemplate {
    pub globals: TemplateGlobals,
    pub status: PageStatus,
    pub product: ProductDetail,
}
