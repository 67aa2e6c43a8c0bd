//! Storefront domain types and the session cart store for LoomCart.
//!
//! - **Catalog**: the [`Product`] snapshot handed over by the catalog backend
//! - **Cart**: line items, the [`CartStore`] and its write-through persistence
//!
//! # Example
//!
//! ```rust
//! use loom_cache::{MemoryStorage, SessionId};
//! use loom_commerce::prelude::*;
//!
//! let shawl = Product::new("shawl-01", "Pashmina Shawl", Price::new(1000.0));
//!
//! let mut cart = CartStore::open(MemoryStorage::new(), SessionId::from("abc"));
//! cart.add_to_cart(shawl.clone(), 1).unwrap();
//! cart.add_to_cart(shawl, 2).unwrap();
//!
//! assert_eq!(cart.count(), 3);
//! assert_eq!(cart.total(), Price::new(3000.0));
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{CartLineItem, CartStore, CART_SLOT};
}
