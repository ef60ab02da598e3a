//! Order types.
//!
//! Status transitions happen on the server; the client only maps the status
//! vocabulary to display labels and passes order data through.

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{FarmerId, OrderId, ProductId, ShipToId};

/// Order status vocabulary used by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Japanese display label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "新規",
            OrderStatus::Processing => "処理中",
            OrderStatus::Shipped => "配送中",
            OrderStatus::Completed => "完了",
            OrderStatus::Canceled => "キャンセル",
        }
    }

    /// Label for a raw status string; unknown statuses are shown verbatim.
    pub fn label_for(raw: &str) -> &str {
        raw.parse::<OrderStatus>()
            .map(|status| status.label())
            .unwrap_or(raw)
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the order list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    /// Raw status string as sent by the server.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_company_id: Option<FarmerId>,
    #[serde(default)]
    pub total_amount: f64,
    /// Raw creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl OrderSummary {
    /// Parsed status, if it is part of the known vocabulary.
    pub fn status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }

    pub fn status_label(&self) -> &str {
        OrderStatus::label_for(&self.status)
    }

    /// Creation date as `YYYY/MM/DD` in the timestamp's own offset.
    ///
    /// Falls back to the raw value when it is not RFC 3339.
    pub fn created_date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => dt.format("%Y/%m/%d").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// One line of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub farmer_company_id: FarmerId,
    pub ship_to_id: ShipToId,
    pub items: Vec<OrderLine>,
    pub discount_amount: f64,
}

/// Result of a successful order submission.
///
/// The response shape is not fixed; the id is picked from `id` or `data.id`
/// when present and the raw body is kept alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub id: Option<OrderId>,
    pub body: serde_json::Value,
}

impl OrderConfirmation {
    pub fn from_body(body: serde_json::Value) -> Self {
        let id = body
            .get("id")
            .or_else(|| body.get("data").and_then(|data| data.get("id")))
            .and_then(|id| match id {
                serde_json::Value::String(s) => Some(OrderId::new(s.clone())),
                serde_json::Value::Number(n) => Some(OrderId::new(n.to_string())),
                _ => None,
            });
        Self { id, body }
    }
}
