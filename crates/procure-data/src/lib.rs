//! HTTP client and typed procurement API calls.
//!
//! [`FetchClient`] is a small builder-style wrapper over `reqwest` that
//! buffers responses and maps failures to [`FetchError`]. [`ProcurementApi`]
//! sits on top of it with one method per remote endpoint, and
//! [`submit_cart`] turns the session cart into an order.
//!
//! Calls are made exactly once: there is no retry, backoff or caching.
//!
//! # Example
//!
//! ```rust,no_run
//! use procure_data::ProcurementApi;
//! use procure_commerce::FarmerId;
//!
//! # async fn run() -> Result<(), procure_data::FetchError> {
//! let api = ProcurementApi::new("http://localhost:3001")?;
//! let products = api.products(&FarmerId::new("farmer-1")).await?;
//! for product in products {
//!     println!("{} {}", product.name, product.effective_price);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod checkout;
mod error;
mod request;
mod response;

pub use api::ProcurementApi;
pub use checkout::{submit_cart, CheckoutError};
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Url;

/// HTTP client for outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Prepend `base_url` to every relative request URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Total time allowed per request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute URL for a path made of raw segments.
    ///
    /// Each segment is percent-encoded, so ids containing `/` or `?` stay a
    /// single path segment.
    pub fn url_for(&self, segments: &[&str]) -> Result<String, FetchError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| FetchError::InvalidUrl("no base URL configured".to_string()))?;
        let mut url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PATCH request.
    pub fn patch(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Patch, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            timeout: self.timeout,
            builder,
        }
    }
}

/// A request builder bound to a client.
#[derive(Debug)]
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    timeout: Option<Duration>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and buffer the response.
    ///
    /// Non-2xx statuses are returned as a normal [`Response`]; use
    /// [`Response::error_for_status`] to turn them into errors.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            headers,
            query,
            body,
        } = self.builder;

        tracing::debug!(method = method.as_str(), url = %url, "sending request");

        let mut request = self.http.request(method.into(), &url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(method = method.as_str(), url = %url, status, "received response");

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        submit_cart, CheckoutError, FetchClient, FetchError, Method, ProcurementApi, Response,
    };
}
