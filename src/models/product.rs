use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// A catalog product as shown by the storefront. Field names serialize back to
/// the remote API's names, so a mapped product can be mapped again unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: Category,
    #[serde(rename = "creationAt")]
    pub creation_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl Product {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
