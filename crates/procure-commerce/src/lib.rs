//! Procurement domain types and the session cart store.
//!
//! This crate holds everything a storefront view needs that does not touch
//! the network:
//!
//! - **Cart**: the session [`CartStore`] with merge-by-product lines and totals
//! - **Catalog**: farmers (suppliers) and their products
//! - **Shipping**: ship-to addresses selectable at checkout
//! - **Orders**: order summaries, the status vocabulary, and the order request
//!
//! # Example
//!
//! ```
//! use procure_commerce::prelude::*;
//!
//! let store = CartStore::new();
//! store.set_farmer(FarmerId::new("farmer-1"));
//! store.add_item(CartItem::new("p1", "Tomatoes", 2, Money::new(100)));
//! store.add_item(CartItem::new("p1", "Tomatoes", 3, Money::new(100)));
//!
//! assert_eq!(store.line_count(), 1);
//! assert_eq!(store.total(), Money::new(500));
//! ```
//!
//! Every type is also available at the crate root:
//!
//! ```
//! use procure_commerce::{Cart, CartStore, OrderStatus, ShipToUpdate};
//!
//! let store = CartStore::new();
//! assert_eq!(store.snapshot(), Cart::default());
//! assert_eq!(OrderStatus::Shipped.label(), "配送中");
//! assert!(ShipToUpdate::default().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod order;
pub mod shipping;

pub use cart::{Cart, CartItem, CartStore};
pub use catalog::{Farmer, Product};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use order::{CreateOrderRequest, OrderConfirmation, OrderLine, OrderStatus, OrderSummary};
pub use shipping::{NewShipTo, ShipTo, ShipToUpdate};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartItem, CartStore};
    pub use crate::catalog::{Farmer, Product};
    pub use crate::order::{
        CreateOrderRequest, OrderConfirmation, OrderLine, OrderStatus, OrderSummary,
    };
    pub use crate::shipping::{NewShipTo, ShipTo, ShipToUpdate};
}
