//! CLI command implementations.

pub mod cart;
pub mod render;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Catalog id of the product.
    pub product_id: String,

    /// How many to add.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Catalog id of the product.
    pub product_id: String,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Catalog id of the product.
    pub product_id: String,

    /// New quantity; values below 1 are ignored.
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub command: RenderCommand,
}

#[derive(Subcommand)]
pub enum RenderCommand {
    /// Render the card of one catalog product.
    Card {
        /// Catalog id of the product.
        product_id: String,
    },
    /// Render the whole catalog as a product grid.
    Grid {
        /// Only products in this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Render the cart page body.
    Cart,
    /// Render the header cart badge.
    Badge,
    /// Render the site footer.
    Footer,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: Option<SessionCommand>,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Print the current session id.
    Show,
    /// Start a new session; the old session's cart stays behind.
    New,
    /// Delete the current session's cart slot.
    End,
}
