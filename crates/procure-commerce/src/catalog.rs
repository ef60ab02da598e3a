//! Catalog types: suppliers and their products.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::ids::{FarmerId, ProductId};
use crate::money::{Currency, Money};

/// A supplier whose catalog can fill a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Farmer {
    pub id: FarmerId,
    pub name: String,
}

impl Farmer {
    pub fn new(id: impl Into<FarmerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A product as listed by the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// List price.
    pub unit_price: f64,
    /// Price actually charged.
    pub effective_price: f64,
    #[serde(default)]
    pub is_special: bool,
    /// Selling unit (e.g., "kg", "case").
    #[serde(default)]
    pub unit: String,
}

impl Product {
    pub fn list_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.unit_price, currency)
    }

    pub fn effective_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.effective_price, currency)
    }

    /// A single-unit cart line charged at the effective price.
    pub fn to_cart_item(&self, currency: Currency) -> CartItem {
        CartItem::new(
            self.id.clone(),
            self.name.clone(),
            1,
            self.effective_price(currency),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_str(
            r#"{
                "id": "p-9",
                "name": "Onions",
                "unitPrice": 300,
                "effectivePrice": 240,
                "isSpecial": true,
                "unit": "kg"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let product = sample();
        assert_eq!(product.id, ProductId::new("p-9"));
        assert!(product.is_special);
        assert_eq!(product.list_price(Currency::JPY), Money::new(300));
        assert_eq!(product.effective_price(Currency::JPY), Money::new(240));
    }

    #[test]
    fn test_cart_item_uses_effective_price() {
        let item = sample().to_cart_item(Currency::JPY);
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.unit_price(), Money::new(240));
        assert_eq!(item.subtotal(), Money::new(240));
        assert_eq!(item.product_name(), "Onions");
    }

    #[test]
    fn test_optional_fields_default() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p-1", "name": "Leeks", "unitPrice": 10, "effectivePrice": 10}"#,
        )
        .unwrap();
        assert!(!product.is_special);
        assert!(product.unit.is_empty());
    }
}
