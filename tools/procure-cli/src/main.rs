//! Procure CLI - terminal storefront for B2B procurement ordering.
//!
//! Commands:
//! - `procure shop` - Interactive cart and checkout session
//! - `procure farmers` - List suppliers
//! - `procure catalog` - Show a supplier's products
//! - `procure orders` - List orders and advance their status
//! - `procure ship-tos` - Manage delivery addresses
//! - `procure config` - Manage configuration

mod commands;
mod config;
mod context;
mod messages;
mod output;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, FarmersArgs, OrdersArgs, ShipTosArgs, ShopArgs};

/// Procure CLI - Order from suppliers and manage orders
#[derive(Parser)]
#[command(name = "procure")]
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

    /// Procurement API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products, fill a cart and place an order
    Shop(ShopArgs),

    /// List suppliers
    Farmers(FarmersArgs),

    /// Show a supplier's products
    Catalog(CatalogArgs),

    /// List and manage orders
    Orders(OrdersArgs),

    /// Manage delivery addresses
    #[command(name = "ship-tos")]
    ShipTos(ShipTosArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Diagnostics go to stderr so `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.base_url.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Farmers(args) => commands::catalog::farmers(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::ShipTos(args) => commands::ship_tos::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
