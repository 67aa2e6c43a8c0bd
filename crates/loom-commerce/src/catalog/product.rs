//! Product snapshot type.

use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product as handed over by the catalog backend.
///
/// The storefront treats it as an immutable snapshot. Only `id` is required
/// when parsing; every other field falls back to empty so partial records from
/// the backend are kept as they are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit price in whole currency units.
    #[serde(default)]
    pub price: Price,
    /// Category label (e.g. "Shawls", "Rugs").
    #[serde(default)]
    pub category: String,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Long description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product with the given id, name and price.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: String::new(),
            images: Vec::new(),
            description: String::new(),
        }
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Append an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new("rug-1", "Kilim Rug", Price::new(4500.0))
            .with_category("Rugs")
            .with_image("/img/kilim-front.jpg")
            .with_image("/img/kilim-back.jpg")
            .with_description("Flat-woven wool.");

        assert_eq!(product.id.as_str(), "rug-1");
        assert_eq!(product.primary_image(), Some("/img/kilim-front.jpg"));
    }

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "id": "shawl-9",
            "name": "Kani Shawl",
            "price": 12500,
            "category": "Shawls",
            "images": ["/img/kani.jpg"],
            "description": "Hand-woven in Kashmir."
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Kani Shawl");
        assert_eq!(product.price, Price::new(12500.0));
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_parse_partial_record() {
        let product: Product = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(product.id.as_str(), "x");
        assert!(product.name.is_empty());
        assert!(product.price.is_zero());
        assert_eq!(product.primary_image(), None);
    }

    #[test]
    fn test_parse_requires_id() {
        assert!(serde_json::from_str::<Product>(r#"{"name": "No id"}"#).is_err());
    }
}
