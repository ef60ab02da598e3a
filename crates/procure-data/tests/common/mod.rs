//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use procure_data::ProcurementApi;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Start a mock backend and a client pointed at it.
pub async fn api_with_backend() -> (MockBackend, ProcurementApi) {
    let backend = MockBackend::start().await;
    let api = ProcurementApi::new(backend.base_url()).unwrap();
    (backend, api)
}
