//! Cart line type.

use serde::Serialize;

use crate::ids::ProductId;
use crate::money::Money;

/// One product line in the cart.
///
/// The subtotal is always `quantity * unit_price`; it is computed here and
/// cannot be set from outside.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    product_id: ProductId,
    product_name: String,
    quantity: i64,
    unit_price: Money,
    subtotal: Money,
}

impl CartItem {
    /// Create a line. The unit price is captured as given and never re-fetched.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
            subtotal: unit_price.times(quantity),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Display label; not authoritative.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.subtotal = self.unit_price.times(quantity);
    }

    pub(crate) fn add_quantity(&mut self, quantity: i64) {
        self.set_quantity(self.quantity.saturating_add(quantity));
    }
}
