// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::validation::{FieldKind, FieldRule, RequestSchema};

/// Body of both POST and PUT: an update replaces every field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl RequestSchema for ProductRequest {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("name", "Name", FieldKind::NonEmptyText),
        FieldRule::required("description", "Description", FieldKind::Text),
        FieldRule::required("price", "Price", FieldKind::Number),
        FieldRule::required("image_url", "Image URL", FieldKind::Text),
    ];
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
        }
    }
}
