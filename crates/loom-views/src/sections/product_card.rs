//! Product card and product grid.

use loom_cache::SessionStorage;
use loom_commerce::cart::CartStore;
use loom_commerce::catalog::Product;

use crate::escape::{html_escape, path_segment_encode};

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";

/// Render one product card.
///
/// `in_cart` is how many of this product the session cart already holds.
pub fn render_product_card(product: &Product, in_cart: u64) -> String {
    let href = product_href(product);
    let id = html_escape(product.id.as_str());
    let name = html_escape(&product.name);
    let image = html_escape(product.primary_image().unwrap_or(PLACEHOLDER_IMAGE));

    let category = if product.category.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="product-category">{}</span>"#,
            html_escape(&product.category)
        )
    };

    let in_cart_note = if in_cart > 0 {
        format!(r#"<span class="product-in-cart">In cart: {}</span>"#, in_cart)
    } else {
        String::new()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <a href="{href}" class="product-link">
        <div class="product-image">
            <img src="{image}" alt="{name}" loading="lazy">
        </div>
        <div class="product-info">
            {category}
            <h3 class="product-title">{name}</h3>
            <div class="product-price">{price}</div>
        </div>
    </a>
    <form class="add-to-cart" action="/cart/add" method="POST">
        <input type="hidden" name="product_id" value="{id}">
        <input type="hidden" name="quantity" value="1">
        <button type="submit">Add to Cart</button>
        {in_cart_note}
    </form>
</article>"#,
        id = id,
        href = href,
        image = image,
        name = name,
        category = category,
        price = html_escape(&product.price.display()),
        in_cart_note = in_cart_note,
    )
}

/// Render a grid of product cards, annotated with what the cart holds.
pub fn render_product_grid<S: SessionStorage>(products: &[Product], cart: &CartStore<S>) -> String {
    if products.is_empty() {
        return r#"<section class="product-grid empty" data-section="products">
    <p>No products found.</p>
</section>"#
            .to_string();
    }

    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, cart.quantity_of(&p.id)))
        .collect();

    format!(
        r#"<section class="product-grid" data-section="products">
    {}
</section>"#,
        cards
    )
}

/// Link to a product's detail page.
pub fn product_href(product: &Product) -> String {
    format!("/product/{}", path_segment_encode(product.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_cache::{MemoryStorage, SessionId};
    use loom_commerce::Price;

    fn shawl() -> Product {
        Product::new("shawl-1", "Kani <Shawl>", Price::new(12500.0))
            .with_category("Shawls")
            .with_image("/img/kani.jpg")
    }

    #[test]
    fn test_card_links_to_detail_page() {
        let html = render_product_card(&shawl(), 0);
        assert!(html.contains(r#"href="/product/shawl-1""#));
        assert!(html.contains(r#"data-product-id="shawl-1""#));
        assert!(html.contains("/img/kani.jpg"));
    }

    #[test]
    fn test_card_escapes_and_formats() {
        let html = render_product_card(&shawl(), 0);
        assert!(html.contains("Kani &lt;Shawl&gt;"));
        assert!(!html.contains("<Shawl>"));
        assert!(html.contains("\u{20b9}12,500"));
        assert!(html.contains(r#"<span class="product-category">Shawls</span>"#));
    }

    #[test]
    fn test_card_in_cart_note() {
        assert!(!render_product_card(&shawl(), 0).contains("In cart"));
        assert!(render_product_card(&shawl(), 2).contains("In cart: 2"));
    }

    #[test]
    fn test_card_placeholder_image() {
        let product = Product::new("x", "Bare", Price::new(10.0));
        assert!(render_product_card(&product, 0).contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_grid_reads_cart() {
        let mut cart = CartStore::open(MemoryStorage::new(), SessionId::from("s"));
        cart.add_to_cart(shawl(), 3).unwrap();

        let other = Product::new("rug-2", "Dhurrie", Price::new(1800.0));
        let html = render_product_grid(&[shawl(), other], &cart);

        assert_eq!(html.matches(r#"class="product-card""#).count(), 2);
        assert_eq!(html.matches("In cart:").count(), 1);
        assert!(html.contains("In cart: 3"));
    }

    #[test]
    fn test_grid_empty() {
        let cart = CartStore::open(MemoryStorage::new(), SessionId::from("s"));
        assert!(render_product_grid(&[], &cart).contains("No products found."));
    }
}
