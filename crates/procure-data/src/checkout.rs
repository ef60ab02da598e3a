//! Submitting the session cart as an order.

use procure_commerce::prelude::*;
use thiserror::Error;

use crate::{FetchError, ProcurementApi};

/// Why a checkout did not produce an order.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The cart is not ready to be ordered; nothing was sent.
    #[error(transparent)]
    Incomplete(#[from] CommerceError),

    /// The service rejected or never answered the submission.
    #[error("Order submission failed: {0}")]
    Remote(#[from] FetchError),
}

/// Submit the cart in `store` as a new order.
///
/// The cart is cleared only after the service accepts the order; on any
/// error it is left exactly as it was.
pub async fn submit_cart(
    api: &ProcurementApi,
    store: &CartStore,
    currency: Currency,
) -> Result<OrderConfirmation, CheckoutError> {
    let request = store.order_request(currency)?;

    tracing::info!(
        farmer = %request.farmer_company_id,
        ship_to = %request.ship_to_id,
        lines = request.items.len(),
        "submitting order"
    );

    let confirmation = api.create_order(&request).await?;
    store.clear();

    tracing::info!(order_id = ?confirmation.id, "order created");
    Ok(confirmation)
}
