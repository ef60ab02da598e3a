//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while preparing procurement data.
///
/// The cart store itself never fails; these come from checkout preparation
/// and from parsing user-supplied vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// No delivery address has been chosen for the cart.
    #[error("No ship-to address selected")]
    MissingShipTo,

    /// No supplier has been chosen for the cart.
    #[error("No farmer selected")]
    MissingFarmer,

    /// The cart has no lines to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Status string outside the known vocabulary.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Currency code we cannot format.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
