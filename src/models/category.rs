use serde::{Deserialize, Serialize};

use crate::utils::slugify;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub image: String,
    #[serde(rename = "creationAt")]
    pub creation_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl Category {
    /// Slug derived from the name alone. Empty when the name has no
    /// alphanumerics, and not unique across categories.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// `{slug}-{id}`, or `category-{id}` for a name with an empty slug.
    /// Distinct for distinct ids since the id is always the final segment.
    pub fn unique_slug(&self) -> String {
        let base = self.slug();
        if base.is_empty() {
            format!("category-{}", self.id)
        } else {
            format!("{}-{}", base, self.id)
        }
    }
}
