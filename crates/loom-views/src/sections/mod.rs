//! Section renderers for the storefront.

mod cart;
mod footer;
mod product_card;

pub use cart::*;
pub use footer::*;
pub use product_card::*;
