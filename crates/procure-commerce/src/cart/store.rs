//! Cart snapshot and the session cart store.

use serde::Serialize;
use tokio::sync::watch;

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::ids::{FarmerId, ProductId, ShipToId};
use crate::money::{Currency, Money};
use crate::order::{CreateOrderRequest, OrderLine};

/// The session's shopping cart.
///
/// A read-only snapshot; all changes go through [`CartStore`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    discount_amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    ship_to_id: Option<ShipToId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    farmer_company_id: Option<FarmerId>,
}

impl Cart {
    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    pub fn ship_to_id(&self) -> Option<&ShipToId> {
        self.ship_to_id.as_ref()
    }

    pub fn farmer_company_id(&self) -> Option<&FarmerId> {
        self.farmer_company_id.as_ref()
    }

    /// Get a line by product.
    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Number of distinct product lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines, saturating.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .map(CartItem::quantity)
            .fold(0, i64::saturating_add)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line subtotals before the discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// `max(0, subtotal - discount)`.
    pub fn total(&self) -> Money {
        (self.subtotal() - self.discount_amount).floor_zero()
    }

    /// Build the order submission for this cart.
    ///
    /// Ship-to and farmer are checked before emptiness.
    pub fn order_request(&self, currency: Currency) -> Result<CreateOrderRequest, CommerceError> {
        let ship_to_id = self.ship_to_id.clone().ok_or(CommerceError::MissingShipTo)?;
        let farmer_company_id = self
            .farmer_company_id
            .clone()
            .ok_or(CommerceError::MissingFarmer)?;

        if self.items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        Ok(CreateOrderRequest {
            farmer_company_id,
            ship_to_id,
            items: self
                .items
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id().clone(),
                    quantity: item.quantity(),
                })
                .collect(),
            discount_amount: self.discount_amount.to_decimal(currency),
        })
    }
}

/// Owner of the session cart.
///
/// Every effective mutation publishes a fresh snapshot to subscribers.
/// Operations are total: unknown product ids are no-ops, not errors.
#[derive(Debug)]
pub struct CartStore {
    state: watch::Sender<Cart>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        let (state, _) = watch::channel(Cart::default());
        Self { state }
    }

    /// Observe cart snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Clone of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Add a line, merging into an existing line for the same product.
    ///
    /// On merge the stored unit price is kept and the subtotal recomputed;
    /// the incoming item's price and subtotal are not trusted.
    pub fn add_item(&self, item: CartItem) {
        self.state.send_modify(|cart| {
            match cart
                .items
                .iter_mut()
                .find(|i| i.product_id() == item.product_id())
            {
                Some(existing) => existing.add_quantity(item.quantity()),
                None => cart.items.push(item),
            }
        });
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_item(&self, product_id: &ProductId) {
        self.state.send_if_modified(|cart| {
            let len_before = cart.items.len();
            cart.items.retain(|i| i.product_id() != product_id);
            cart.items.len() < len_before
        });
    }

    /// Set a line's quantity, clamped to at least 1.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) {
        self.state.send_if_modified(|cart| {
            match cart.items.iter_mut().find(|i| i.product_id() == product_id) {
                Some(item) => {
                    item.set_quantity(quantity.max(1));
                    true
                }
                None => false,
            }
        });
    }

    /// Replace the discount. Any value is accepted; callers validate.
    pub fn set_discount(&self, amount: Money) {
        self.state.send_modify(|cart| cart.discount_amount = amount);
    }

    pub fn set_ship_to(&self, ship_to_id: ShipToId) {
        self.state.send_modify(|cart| cart.ship_to_id = Some(ship_to_id));
    }

    pub fn set_farmer(&self, farmer_company_id: FarmerId) {
        self.state
            .send_modify(|cart| cart.farmer_company_id = Some(farmer_company_id));
    }

    /// `max(0, Σ subtotal - discount)`.
    pub fn total(&self) -> Money {
        self.state.borrow().total()
    }

    /// Reset to an empty cart, dropping ship-to and farmer.
    pub fn clear(&self) {
        self.state.send_modify(|cart| *cart = Cart::default());
    }

    pub fn item(&self, product_id: &ProductId) -> Option<CartItem> {
        self.state.borrow().item(product_id).cloned()
    }

    /// Distinct product lines; the cart badge count.
    pub fn line_count(&self) -> usize {
        self.state.borrow().line_count()
    }

    pub fn item_count(&self) -> i64 {
        self.state.borrow().item_count()
    }

    pub fn subtotal(&self) -> Money {
        self.state.borrow().subtotal()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// See [`Cart::order_request`].
    pub fn order_request(&self, currency: Currency) -> Result<CreateOrderRequest, CommerceError> {
        self.state.borrow().order_request(currency)
    }
}
