//! Shopping cart module.
//!
//! Contains the cart line type, the cart snapshot, and the store that owns
//! the session's cart.

mod item;
mod store;

pub use item::CartItem;
pub use store::{Cart, CartStore};
