//! Normalization of raw catalog JSON into the storefront's view models.
//!
//! Only recognized fields are read; anything else in the payload is dropped.
//! Required fields that are missing or have the wrong type produce
//! `FetchError::Mapping` rather than a placeholder value.

use serde_json::{Map, Value};

use super::error::FetchError;
use crate::models::{Category, Product};

type Object = Map<String, Value>;

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object, FetchError> {
    value
        .as_object()
        .ok_or_else(|| FetchError::mapping(format!("{} is not an object", what)))
}

fn required_id(obj: &Object, what: &str) -> Result<u64, FetchError> {
    obj.get("id")
        .and_then(Value::as_u64)
        .filter(|id| *id > 0)
        .ok_or_else(|| FetchError::mapping(format!("{} has no positive integer id", what)))
}

fn optional_str(obj: &Object, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn map_category(value: &Value) -> Result<Category, FetchError> {
    let obj = as_object(value, "category")?;
    let id = required_id(obj, "category")?;
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| FetchError::mapping(format!("category {} has no name", id)))?
        .to_string();

    Ok(Category {
        id,
        name,
        image: optional_str(obj, "image"),
        creation_at: optional_str(obj, "creationAt"),
        updated_at: optional_str(obj, "updatedAt"),
    })
}

pub fn map_product(value: &Value) -> Result<Product, FetchError> {
    let obj = as_object(value, "product")?;
    let id = required_id(obj, "product")?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| FetchError::mapping(format!("product {} has no title", id)))?
        .to_string();

    let price = obj
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| FetchError::mapping(format!("product {} has no valid price", id)))?;

    let category = match obj.get("category") {
        Some(raw) => map_category(raw)
            .map_err(|e| FetchError::mapping(format!("product {}: {}", id, mapping_detail(&e))))?,
        None => return Err(FetchError::mapping(format!("product {} has no category", id))),
    };

    let images = obj
        .get("images")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Product {
        id,
        title,
        description: optional_str(obj, "description"),
        price,
        images,
        category,
        creation_at: optional_str(obj, "creationAt"),
        updated_at: optional_str(obj, "updatedAt"),
    })
}

/// Map a product list. One malformed element fails the whole list.
pub fn map_products(value: &Value) -> Result<Vec<Product>, FetchError> {
    map_list(value, "products", map_product)
}

pub fn map_categories(value: &Value) -> Result<Vec<Category>, FetchError> {
    map_list(value, "categories", map_category)
}

fn map_list<T>(
    value: &Value,
    what: &str,
    map_one: fn(&Value) -> Result<T, FetchError>,
) -> Result<Vec<T>, FetchError> {
    let items = value
        .as_array()
        .ok_or_else(|| FetchError::mapping(format!("expected a list of {}", what)))?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            map_one(item).map_err(|e| FetchError::mapping(format!("{} #{}: {}", what, idx, mapping_detail(&e))))
        })
        .collect()
}

fn mapping_detail(e: &FetchError) -> String {
    match e {
        FetchError::Mapping(detail) => detail.clone(),
        other => other.to_string(),
    }
}
