//! Souvenir store products.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Price in loyalty points.
    pub price: u32,
    pub image: String,
    pub category: String,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("{} points", self.price)
    }
}
