//! Shopping cart module.
//!
//! Contains the line item type and the session cart store.

mod line_item;
mod store;

pub use line_item::CartLineItem;
pub use store::{CartStore, CART_SLOT};
