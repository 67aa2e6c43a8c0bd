//! Product catalog module.
//!
//! The catalog itself lives in the backend; this module only holds the
//! product snapshot type and a read-only lookup over a fetched listing.

mod product;

pub use product::Product;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// A fetched product listing, in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap a listing.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a listing from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look a product up by id, failing if absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products in a category, case-insensitive.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("a", "Dhurrie", Price::new(1800.0)).with_category("Rugs"),
            Product::new("b", "Ikat Stole", Price::new(950.0)).with_category("Stoles"),
            Product::new("c", "Kilim", Price::new(4500.0)).with_category("rugs"),
        ])
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.get(&"b".into()).unwrap().name, "Ikat Stole");
        assert!(catalog.get(&"z".into()).is_none());
    }

    #[test]
    fn test_require_missing() {
        let err = catalog().require(&"z".into()).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id == "z"));
    }

    #[test]
    fn test_in_category() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.in_category("RUGS").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(r#"[{"id": "a", "price": 10}, {"id": "b"}]"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(Catalog::from_json("{}").is_err());
    }
}
