use crate::models::Category;

#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub name: String,
    pub slug: String,
    pub image_url: String,
}

impl CategoryLink {
    /// `slug` comes from `api::link_slugs`, which needs the whole list.
    pub fn new(c: &Category, slug: String) -> Self {
        CategoryLink {
            name: c.name.clone(),
            slug,
            image_url: c.image.clone(),
        }
    }
}
