use askama::Template;

use super::TemplateGlobals;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub globals: TemplateGlobals,
    pub message: String,
}
