// src/dtos/cart.rs
use serde::{Deserialize, Serialize};

use crate::models::cart_item::CartItem;
use crate::validation::{FieldKind, FieldRule, RequestSchema};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

impl RequestSchema for CartItemRequest {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("product_id", "Product ID", FieldKind::Integer),
        FieldRule::required("quantity", "Quantity", FieldKind::Integer),
    ];
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}
