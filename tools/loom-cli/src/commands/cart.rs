//! Cart commands.

use anyhow::{Context as _, Result};
use loom_cache::SessionStorage;
use loom_commerce::cart::CartStore;
use loom_commerce::ProductId;
use serde::Serialize;

use super::{AddArgs, RemoveArgs, UpdateArgs};
use crate::context::Context;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&ProductId::from(args.product_id))?.clone();
    let name = product.name.clone();

    let mut cart = ctx.open_cart()?;
    let before = cart.quantity_of(&product.id);
    let id = product.id.clone();
    cart.add_to_cart(product, args.quantity)
        .context("Failed to save cart")?;

    if cart.quantity_of(&id) == before {
        ctx.output.info(&format!(
            "Quantity {} ignored, cart unchanged",
            args.quantity
        ));
    } else {
        ctx.output
            .success(&format!("Added {} x {} to cart", args.quantity, name));
    }
    report(&cart, ctx);
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let id = ProductId::from(args.product_id);
    let present = cart.contains(&id);
    cart.remove_from_cart(&id).context("Failed to save cart")?;

    if present {
        ctx.output.success(&format!("Removed {} from cart", id));
    } else {
        ctx.output.info(&format!("{} was not in the cart", id));
    }
    report(&cart, ctx);
    Ok(())
}

/// Run the update command.
pub fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let id = ProductId::from(args.product_id);
    cart.update_quantity(&id, args.quantity)
        .context("Failed to save cart")?;

    match cart.get(&id) {
        Some(item) if item.quantity as i64 == args.quantity => ctx
            .output
            .success(&format!("Set {} to {}", id, item.quantity)),
        Some(item) => ctx.output.info(&format!(
            "Quantity {} ignored, {} stays at {}",
            args.quantity, id, item.quantity
        )),
        None => ctx.output.info(&format!("{} is not in the cart", id)),
    }
    report(&cart, ctx);
    Ok(())
}

/// Run the clear command.
pub fn clear(ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    cart.clear_cart().context("Failed to save cart")?;
    ctx.output.success("Cart cleared");
    report(&cart, ctx);
    Ok(())
}

/// Run the show command.
pub fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&CartReport::from_store(&cart));
        return Ok(());
    }

    ctx.output.header(&format!("Cart for {}", cart.session_id()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let widths = [16, 28, 12, 5, 12];
    ctx.output
        .table_row(&["ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
    for item in cart.items() {
        let quantity = item.quantity.to_string();
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                &item.product.name,
                &item.product.price.display(),
                &quantity,
                &item.line_total().display(),
            ],
            &widths,
        );
    }
    println!();
    ctx.output.kv("Items", &cart.count().to_string());
    ctx.output.kv("Total", &cart.total().display());
    Ok(())
}

fn report<S: SessionStorage>(cart: &CartStore<S>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&CartReport::from_store(cart));
        return;
    }
    ctx.output.kv("Items", &cart.count().to_string());
    ctx.output.kv("Total", &cart.total().display());
}

/// Machine-readable cart snapshot for `--json`.
#[derive(Debug, Serialize)]
pub struct CartReport<'a> {
    pub session: &'a str,
    pub items: &'a [loom_commerce::cart::CartLineItem],
    pub count: u64,
    pub total: f64,
}

impl<'a> CartReport<'a> {
    fn from_store<S: SessionStorage>(cart: &'a CartStore<S>) -> Self {
        Self {
            session: cart.session_id().as_str(),
            items: cart.items(),
            count: cart.count(),
            total: cart.total().amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use std::path::Path;

    const CATALOG: &str = r#"[
        {"id": "A", "name": "Banarasi Saree", "price": 1000, "category": "Sarees"},
        {"id": "B", "name": "Cotton Towel", "price": 500, "category": "Home"}
    ]"#;

    fn context_in(dir: &Path) -> Context {
        std::fs::write(dir.join("catalog.json"), CATALOG).unwrap();
        Context::new(
            CliConfig::default(),
            Output::new(false, true),
            dir.to_path_buf(),
            Some("sess_test".to_string()),
        )
    }

    #[test]
    fn test_add_persists_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());

        add(AddArgs { product_id: "A".into(), quantity: 1 }, &ctx).unwrap();
        add(AddArgs { product_id: "A".into(), quantity: 2 }, &ctx).unwrap();
        add(AddArgs { product_id: "B".into(), quantity: 1 }, &ctx).unwrap();

        let cart = ctx.open_cart().unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.count(), 4);
        assert_eq!(cart.total().amount(), 3500.0);
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());

        let err = add(AddArgs { product_id: "Z".into(), quantity: 1 }, &ctx).unwrap_err();
        assert!(err.to_string().contains("Product not found: Z"));
    }

    #[test]
    fn test_update_remove_clear() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());

        add(AddArgs { product_id: "A".into(), quantity: 2 }, &ctx).unwrap();
        add(AddArgs { product_id: "B".into(), quantity: 1 }, &ctx).unwrap();

        update(UpdateArgs { product_id: "A".into(), quantity: 0 }, &ctx).unwrap();
        assert_eq!(ctx.open_cart().unwrap().quantity_of(&"A".into()), 2);

        update(UpdateArgs { product_id: "A".into(), quantity: 5 }, &ctx).unwrap();
        assert_eq!(ctx.open_cart().unwrap().quantity_of(&"A".into()), 5);

        remove(RemoveArgs { product_id: "A".into() }, &ctx).unwrap();
        assert!(!ctx.open_cart().unwrap().contains(&"A".into()));

        clear(&ctx).unwrap();
        assert!(ctx.open_cart().unwrap().is_empty());
    }

    #[test]
    fn test_report_shape() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());
        add(AddArgs { product_id: "B".into(), quantity: 3 }, &ctx).unwrap();

        let cart = ctx.open_cart().unwrap();
        let value = serde_json::to_value(CartReport::from_store(&cart)).unwrap();
        assert_eq!(value["session"], "sess_test");
        assert_eq!(value["count"], 3);
        assert_eq!(value["total"], 1500.0);
        assert_eq!(value["items"][0]["product"]["id"], "B");
    }
}
