//! HTML rendering commands.

use anyhow::Result;
use chrono::Datelike;
use loom_commerce::catalog::Product;
use loom_commerce::ProductId;
use loom_views::{
    render_cart_badge, render_cart_summary, render_footer, render_product_card,
    render_product_grid,
};

use super::{RenderArgs, RenderCommand};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let html = match args.command {
        RenderCommand::Card { product_id } => {
            let catalog = ctx.catalog()?;
            let product = catalog.require(&ProductId::from(product_id))?;
            let cart = ctx.open_cart()?;
            render_product_card(product, cart.quantity_of(&product.id))
        }
        RenderCommand::Grid { category } => {
            let catalog = ctx.catalog()?;
            let products: Vec<Product> = match category.as_deref() {
                Some(category) => catalog.in_category(category).cloned().collect(),
                None => catalog.products().to_vec(),
            };
            let cart = ctx.open_cart()?;
            render_product_grid(&products, &cart)
        }
        RenderCommand::Cart => render_cart_summary(&ctx.open_cart()?),
        RenderCommand::Badge => render_cart_badge(ctx.open_cart()?.count()),
        RenderCommand::Footer => render_footer(chrono::Local::now().year()),
    };

    ctx.output.raw(&html);
    Ok(())
}
