use std::collections::HashSet;

use crate::models::Category;

use super::client::CatalogClient;
use super::mapper::map_categories;
use super::result::FetchResult;

/// Load all catalog categories.
pub async fn fetch_categories(catalog: &CatalogClient) -> FetchResult<Vec<Category>> {
    catalog.get("/categories").await.and_then(|payload| map_categories(&payload))
}

/// Link slug for each category, in list order.
///
/// The first category with a given name slug keeps the short form. Later
/// duplicates, empty slugs, and short forms that would shadow some category's
/// `unique_slug()` use `unique_slug()` instead, so every slug is non-empty and
/// resolves back to its own category through [`find_by_slug`].
pub fn link_slugs(categories: &[Category]) -> Vec<String> {
    let reserved: HashSet<String> = categories.iter().map(Category::unique_slug).collect();
    let mut taken = HashSet::new();
    categories
        .iter()
        .map(|c| {
            let short = c.slug();
            if !short.is_empty() && !reserved.contains(&short) && taken.insert(short.clone()) {
                short
            } else {
                c.unique_slug()
            }
        })
        .collect()
}

/// Resolve a `/category/{slug}` segment. Accepts both the id-suffixed form and
/// the short form handed out by [`link_slugs`].
pub fn find_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    let by_id = slug
        .rsplit_once('-')
        .and_then(|(_, id)| id.parse::<u64>().ok())
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .filter(|c| c.unique_slug() == slug);
    if by_id.is_some() {
        return by_id;
    }
    categories
        .iter()
        .zip(link_slugs(categories))
        .find(|(_, link)| link == slug)
        .map(|(c, _)| c)
}
