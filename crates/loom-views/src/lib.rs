//! Stateless HTML fragments for the LoomCart storefront.
//!
//! Every renderer is a plain function from data to an HTML string. Anything
//! cart-dependent takes the session's [`CartStore`](loom_commerce::cart::CartStore)
//! by reference; nothing here holds state of its own.

mod escape;
mod sections;

pub use escape::{html_escape, path_segment_encode};
pub use sections::*;
