//! Loom CLI - drive a LoomCart session cart from the command line.
//!
//! Commands:
//! - `loom add` - Add a catalog product to the cart
//! - `loom remove` - Remove a product from the cart
//! - `loom update` - Set the quantity of a cart line
//! - `loom clear` - Empty the cart
//! - `loom show` - Print the cart with its count and total
//! - `loom render` - Print storefront HTML fragments
//! - `loom session` - Start or inspect the current session

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, RemoveArgs, RenderArgs, SessionArgs, UpdateArgs};

/// Loom CLI - manage the shopping cart of a storefront session
#[derive(Parser)]
#[command(name = "loom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Session to operate on (defaults to the current session)
    #[arg(short, long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Set the quantity of a product in the cart
    Update(UpdateArgs),

    /// Remove everything from the cart
    Clear,

    /// Show the cart contents
    Show,

    /// Render storefront HTML fragments
    Render(RenderArgs),

    /// Manage the browsing session
    Session(SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.session.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Update(args) => commands::cart::update(args, &ctx),
        Commands::Clear => commands::cart::clear(&ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
