//! Terminal renderings of the storefront pages.
//!
//! Views only read state. Mutations happen in the shop session through the
//! cart store.

mod cart;
mod catalog;
mod orders;
mod ship_tos;

pub use cart::{cart_line_label, render_cart};
pub use catalog::{product_label, render_products};
pub use orders::{render_order, render_orders};
pub use ship_tos::render_ship_tos;
