//! Cart line item type.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// One distinct product in the cart and how many of it.
///
/// Holds the full product snapshot taken when the product was first added,
/// so the cart can render without going back to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product snapshot.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u64,
}

impl CartLineItem {
    /// Create a line item.
    pub fn new(product: Product, quantity: u64) -> Self {
        Self { product, quantity }
    }

    /// The uniqueness key of this line.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}
