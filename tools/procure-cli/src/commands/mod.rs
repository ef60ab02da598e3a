//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod orders;
pub mod ship_tos;
pub mod shop;

use clap::{Args, Subcommand};
use procure_commerce::OrderStatus;

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start with this farmer selected.
    #[arg(short, long)]
    pub farmer: Option<String>,
}

/// Arguments for the farmers command.
#[derive(Args)]
pub struct FarmersArgs {
    /// Ask the service instead of using configured farmers.
    #[arg(long)]
    pub remote: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Farmer (supplier) ID.
    pub farmer: String,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,

    /// Only list orders with this status (new, processing, shipped, completed, canceled).
    #[arg(short, long)]
    pub status: Option<OrderStatus>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders.
    List,
    /// Show a single order.
    Show {
        /// Order ID.
        id: String,
    },
    /// Confirm an order.
    Confirm {
        /// Order ID.
        id: String,
    },
    /// Mark an order as shipped.
    Ship {
        /// Order ID.
        id: String,
        /// Shipment details as a JSON object, sent as-is.
        #[arg(long, default_value = "{}")]
        body: String,
    },
    /// Mark an order as completed.
    Complete {
        /// Order ID.
        id: String,
    },
}

/// Arguments for the ship-tos command.
#[derive(Args)]
pub struct ShipTosArgs {
    #[command(subcommand)]
    pub command: Option<ShipTosCommand>,
}

#[derive(Subcommand)]
pub enum ShipTosCommand {
    /// List delivery addresses.
    List,
    /// Register a delivery address.
    Add {
        /// Short name shown in pickers.
        #[arg(long)]
        label: String,
        /// Postal address.
        #[arg(long)]
        address: String,
        /// Contact phone number.
        #[arg(long)]
        phone: Option<String>,
    },
    /// Change a delivery address.
    Update {
        /// Ship-to ID.
        id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Print the config file in use.
    Path,
    /// Write a default procure.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
