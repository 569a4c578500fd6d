use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: String,
    /// Defaults to 1.
    #[serde(default)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Added to the current quantity; the line is removed at 0.
    pub delta: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartItem>,
    /// Distinct lines.
    pub count: usize,
    pub total: i64,
}

impl CartView {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items
            .iter()
            .map(CartItem::line_total)
            .fold(0i64, i64::saturating_add);
        Self {
            count: items.len(),
            items,
            total,
        }
    }
}
