//! Cart badge and cart summary.

use loom_cache::SessionStorage;
use loom_commerce::cart::{CartLineItem, CartStore};

use crate::escape::html_escape;
use crate::sections::product_href;

/// Render the header cart link with its item count.
pub fn render_cart_badge(count: u64) -> String {
    let badge = if count > 0 {
        format!(r#"<span class="cart-count">{}</span>"#, count)
    } else {
        r#"<span class="cart-count" hidden>0</span>"#.to_string()
    };

    format!(
        r#"<a href="/cart" class="cart-link" aria-label="Cart ({count} items)">Cart {badge}</a>"#,
        count = count,
        badge = badge
    )
}

/// Render the cart page body.
pub fn render_cart_summary<S: SessionStorage>(cart: &CartStore<S>) -> String {
    if cart.is_empty() {
        return r#"<section class="cart-summary empty" data-section="cart">
    <p>Your cart is empty.</p>
    <a href="/" class="continue-shopping">Continue shopping</a>
</section>"#
            .to_string();
    }

    let rows: String = cart.items().iter().map(render_cart_row).collect();

    format!(
        r#"<section class="cart-summary" data-section="cart">
    <p class="cart-item-count">{count} item(s) in your cart</p>
    <table class="cart-items">
        <thead>
            <tr><th>Product</th><th>Price</th><th>Quantity</th><th>Subtotal</th><th></th></tr>
        </thead>
        <tbody>
            {rows}
        </tbody>
    </table>
    <div class="cart-total">
        <span>Total</span>
        <strong>{total}</strong>
    </div>
    <form action="/cart/clear" method="POST">
        <button type="submit" class="clear-cart">Clear Cart</button>
    </form>
</section>"#,
        count = cart.count(),
        rows = rows,
        total = html_escape(&cart.total().display())
    )
}

fn render_cart_row(item: &CartLineItem) -> String {
    let id = html_escape(item.product.id.as_str());
    format!(
        r#"<tr class="cart-row" data-product-id="{id}">
                <td><a href="{href}">{name}</a></td>
                <td>{price}</td>
                <td>
                    <form action="/cart/update" method="POST">
                        <input type="hidden" name="product_id" value="{id}">
                        <input type="number" name="quantity" value="{quantity}" min="1">
                    </form>
                </td>
                <td>{subtotal}</td>
                <td>
                    <form action="/cart/remove" method="POST">
                        <input type="hidden" name="product_id" value="{id}">
                        <button type="submit" class="remove-item">Remove</button>
                    </form>
                </td>
            </tr>"#,
        id = id,
        href = product_href(&item.product),
        name = html_escape(&item.product.name),
        price = html_escape(&item.product.price.display()),
        quantity = item.quantity,
        subtotal = html_escape(&item.line_total().display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_cache::{MemoryStorage, SessionId};
    use loom_commerce::catalog::Product;
    use loom_commerce::Price;

    #[test]
    fn test_badge() {
        assert!(render_cart_badge(0).contains("hidden"));
        let html = render_cart_badge(4);
        assert!(html.contains(r#"<span class="cart-count">4</span>"#));
        assert!(html.contains(r#"href="/cart""#));
    }

    #[test]
    fn test_summary_empty() {
        let cart = CartStore::open(MemoryStorage::new(), SessionId::from("s"));
        assert!(render_cart_summary(&cart).contains("Your cart is empty."));
    }

    #[test]
    fn test_summary_lists_items_and_total() {
        let mut cart = CartStore::open(MemoryStorage::new(), SessionId::from("s"));
        cart.add_to_cart(Product::new("A", "Saree", Price::new(1000.0)), 3)
            .unwrap();
        cart.add_one(Product::new("B", "Towel", Price::new(500.0)))
            .unwrap();

        let html = render_cart_summary(&cart);
        assert_eq!(html.matches(r#"class="cart-row""#).count(), 2);
        assert!(html.contains("4 item(s)"));
        assert!(html.contains(r#"value="3" min="1""#));
        assert!(html.contains("<strong>\u{20b9}3,500</strong>"));
        assert!(html.contains(r#"<a href="/product/A">Saree</a>"#));
    }
}
