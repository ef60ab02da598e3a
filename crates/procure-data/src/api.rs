//! Typed calls against the procurement API.

use std::time::Duration;

use procure_commerce::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FetchClient, FetchError, Method};

/// List responses arrive either bare or wrapped as `{data: [...]}`
/// (`{products: [...]}` for catalogs); a missing or null list is empty.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "products")]
        data: Option<Vec<T>>,
    },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) => items,
            ListBody::Wrapped { data } => data.unwrap_or_default(),
        }
    }
}

/// Drop a top-level `data` wrapper, if any.
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Client for the procurement service.
///
/// Each method issues exactly one request. Order status transitions and
/// order details are passed through as raw JSON.
#[derive(Debug, Clone)]
pub struct ProcurementApi {
    client: FetchClient,
}

impl ProcurementApi {
    /// Client for `base_url` with JSON headers.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = FetchClient::new()
            .with_base_url(base_url)
            .with_default_header("Content-Type", "application/json")
            .with_default_header("Accept", "application/json");
        // Validate the base URL up front rather than on the first call.
        client.url_for(&[])?;
        Ok(Self { client })
    }

    /// Limit every call to `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    // === Catalog ===

    /// `GET /farmers`
    pub async fn farmers(&self) -> Result<Vec<Farmer>, FetchError> {
        self.list(&["farmers"], None).await
    }

    /// `GET /farmers/{id}/products`
    pub async fn products(&self, farmer_id: &FarmerId) -> Result<Vec<Product>, FetchError> {
        self.list(&["farmers", farmer_id.as_str(), "products"], None)
            .await
    }

    // === Ship-tos ===

    /// `GET /ship-tos`
    pub async fn ship_tos(&self) -> Result<Vec<ShipTo>, FetchError> {
        self.list(&["ship-tos"], None).await
    }

    /// `POST /ship-tos`
    pub async fn create_ship_to(&self, ship_to: &NewShipTo) -> Result<Value, FetchError> {
        self.call(Method::Post, &["ship-tos"], Some(ship_to)).await
    }

    /// `PATCH /ship-tos/{id}`
    pub async fn update_ship_to(
        &self,
        ship_to_id: &ShipToId,
        update: &ShipToUpdate,
    ) -> Result<Value, FetchError> {
        self.call(Method::Patch, &["ship-tos", ship_to_id.as_str()], Some(update))
            .await
    }

    // === Orders ===

    /// `POST /orders`
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderConfirmation, FetchError> {
        let body = self.call(Method::Post, &["orders"], Some(request)).await?;
        Ok(OrderConfirmation::from_body(body))
    }

    /// `GET /orders[?status=...]`
    pub async fn orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderSummary>, FetchError> {
        self.list(&["orders"], status.map(|s| ("status", s.as_str())))
            .await
    }

    /// `GET /orders/{id}`
    pub async fn order(&self, order_id: &OrderId) -> Result<Value, FetchError> {
        let body = self
            .call::<()>(Method::Get, &["orders", order_id.as_str()], None)
            .await?;
        Ok(unwrap_data(body))
    }

    /// `POST /orders/{id}/confirm`
    pub async fn confirm_order(&self, order_id: &OrderId) -> Result<Value, FetchError> {
        self.call::<()>(Method::Post, &["orders", order_id.as_str(), "confirm"], None)
            .await
    }

    /// `POST /orders/{id}/ship` with an opaque shipment body.
    pub async fn ship_order(
        &self,
        order_id: &OrderId,
        shipment: &Value,
    ) -> Result<Value, FetchError> {
        self.call(
            Method::Post,
            &["orders", order_id.as_str(), "ship"],
            Some(shipment),
        )
        .await
    }

    /// `POST /orders/{id}/complete`
    pub async fn complete_order(&self, order_id: &OrderId) -> Result<Value, FetchError> {
        self.call::<()>(Method::Post, &["orders", order_id.as_str(), "complete"], None)
            .await
    }

    // === Plumbing ===

    async fn list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<(&str, &str)>,
    ) -> Result<Vec<T>, FetchError> {
        let url = self.client.url_for(segments)?;
        let mut request = self.client.get(url);
        if let Some((key, value)) = query {
            request = request.query(key, value);
        }
        let body: ListBody<T> = self.finish(request.send().await)?.json()?;
        Ok(body.into_vec())
    }

    async fn call<B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Value, FetchError> {
        let url = self.client.url_for(segments)?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.finish(request.send().await)?.json()
    }

    fn finish(
        &self,
        result: Result<crate::Response, FetchError>,
    ) -> Result<crate::Response, FetchError> {
        let response = result?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "procurement API returned an error");
        }
        response.error_for_status()
    }
}
