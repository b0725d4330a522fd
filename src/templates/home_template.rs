use askama::Template;

use super::TemplateGlobals;
use crate::models::ProductCard;
use crate::view::PageStatus;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub globals: TemplateGlobals,
    pub status: PageStatus,
    pub products: &'a [ProductCard],
}
