use askama::Template;

use super::TemplateGlobals;
use crate::models::CategoryLink;
use crate::view::PageStatus;

#[derive(Template)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate<'a> {
    pub globals: TemplateGlobals,
    pub status: PageStatus,
    pub categories: &'a [CategoryLink],
}
