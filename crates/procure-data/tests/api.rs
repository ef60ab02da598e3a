//! Endpoint contract tests for the procurement API client.

mod common;

use std::time::Duration;

use common::{api_with_backend, MockResponse};
use procure_commerce::prelude::*;
use procure_data::{FetchError, ProcurementApi};
use serde_json::json;

#[tokio::test]
async fn test_ship_tos_reads_data_envelope() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(
            r#"{"data": [
                {"id": "st-1", "label": "Head office", "address": "Chiyoda, Tokyo", "phone": "03-1111-2222"},
                {"id": "st-2", "label": "Warehouse", "address": "Koto, Tokyo"}
            ]}"#,
        ))
        .await;

    let ship_tos = api.ship_tos().await.unwrap();
    assert_eq!(ship_tos.len(), 2);
    assert_eq!(ship_tos[0].phone.as_deref(), Some("03-1111-2222"));
    assert!(ship_tos[1].phone.is_none());

    let req = backend.single_request().await;
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/ship-tos");
    assert_eq!(req.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_ship_tos_missing_data_is_empty() {
    let (backend, api) = api_with_backend().await;
    backend.enqueue(MockResponse::json(r#"{}"#)).await;

    assert!(api.ship_tos().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_products_reads_products_envelope() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(
            r#"{"products": [
                {"id": "p-1", "name": "Carrots", "unitPrice": 200, "effectivePrice": 160, "isSpecial": true, "unit": "kg"}
            ]}"#,
        ))
        .await;

    let products = api.products(&FarmerId::new("farmer-7")).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].effective_price(Currency::JPY), Money::new(160));

    let req = backend.single_request().await;
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/farmers/farmer-7/products");
}

#[tokio::test]
async fn test_path_ids_are_encoded() {
    let (backend, api) = api_with_backend().await;
    backend.enqueue(MockResponse::json(r#"{"products": []}"#)).await;

    api.products(&FarmerId::new("a/b")).await.unwrap();

    let req = backend.single_request().await;
    assert_eq!(req.path, "/farmers/a%2Fb/products");
}

#[tokio::test]
async fn test_farmers_accepts_bare_list() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(r#"[{"id": "f-1", "name": "Farmer Tanaka"}]"#))
        .await;

    let farmers = api.farmers().await.unwrap();
    assert_eq!(farmers, vec![Farmer::new("f-1", "Farmer Tanaka")]);
    assert_eq!(backend.single_request().await.path, "/farmers");
}

#[tokio::test]
async fn test_create_order_posts_body() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(r#"{"id": "o-100", "status": "new"}"#))
        .await;

    let request = CreateOrderRequest {
        farmer_company_id: FarmerId::new("f-1"),
        ship_to_id: ShipToId::new("st-1"),
        items: vec![OrderLine {
            product_id: ProductId::new("p-1"),
            quantity: 3,
        }],
        discount_amount: 100.0,
    };
    let confirmation = api.create_order(&request).await.unwrap();
    assert_eq!(confirmation.id, Some(OrderId::new("o-100")));

    let req = backend.single_request().await;
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/orders");
    assert_eq!(
        req.json(),
        json!({
            "farmerCompanyId": "f-1",
            "shipToId": "st-1",
            "items": [{"productId": "p-1", "quantity": 3}],
            "discountAmount": 100.0
        })
    );
}

#[tokio::test]
async fn test_orders_status_filter() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(
            r#"{"data": [{"id": "o-1", "status": "shipped", "farmerCompanyId": "f-1", "totalAmount": 900, "createdAt": "2025-01-02T03:04:05Z"}]}"#,
        ))
        .await;
    backend.enqueue(MockResponse::json(r#"{"data": []}"#)).await;

    let orders = api.orders(Some(OrderStatus::Shipped)).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status(), Some(OrderStatus::Shipped));

    assert!(api.orders(None).await.unwrap().is_empty());

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/orders");
    assert_eq!(requests[0].query.as_deref(), Some("status=shipped"));
    assert_eq!(requests[1].query, None);
}

#[tokio::test]
async fn test_orders_list_survives_sparse_rows() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(
            r#"{"data": [
                {"id": "o-1", "status": "new", "farmerCompanyId": "f-1", "totalAmount": 300, "createdAt": "2025-01-02T03:04:05Z"},
                {"id": "o-2", "status": "processing"}
            ]}"#,
        ))
        .await;

    let orders = api.orders(None).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].farmer_company_id, Some(FarmerId::new("f-1")));
    assert!(orders[1].farmer_company_id.is_none());
    assert_eq!(orders[1].created_at, "");
}

#[tokio::test]
async fn test_products_without_list_is_empty() {
    let (backend, api) = api_with_backend().await;
    backend.enqueue(MockResponse::json(r#"{"total": 0}"#)).await;

    assert!(api.products(&FarmerId::new("f-1")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_detail_unwraps_data() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(r#"{"data": {"id": "o-1", "status": "new"}}"#))
        .await;

    let order = api.order(&OrderId::new("o-1")).await.unwrap();
    assert_eq!(order, json!({"id": "o-1", "status": "new"}));
    assert_eq!(backend.single_request().await.path, "/orders/o-1");
}

#[tokio::test]
async fn test_status_transitions_hit_their_paths() {
    let (backend, api) = api_with_backend().await;
    let id = OrderId::new("o-5");

    api.confirm_order(&id).await.unwrap();
    api.ship_order(&id, &json!({"carrier": "Yamato", "trackingNumber": "1234"}))
        .await
        .unwrap();
    api.complete_order(&id).await.unwrap();

    let requests = backend.captured_requests().await;
    let calls: Vec<(&str, &str)> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("POST", "/orders/o-5/confirm"),
            ("POST", "/orders/o-5/ship"),
            ("POST", "/orders/o-5/complete"),
        ]
    );
    assert!(requests[0].body.is_empty());
    assert_eq!(
        requests[1].json(),
        json!({"carrier": "Yamato", "trackingNumber": "1234"})
    );
}

#[tokio::test]
async fn test_transition_with_empty_reply() {
    let (backend, api) = api_with_backend().await;
    backend.enqueue(MockResponse::empty(204)).await;

    let body = api.confirm_order(&OrderId::new("o-1")).await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_ship_to_create_and_update() {
    let (backend, api) = api_with_backend().await;

    api.create_ship_to(&NewShipTo {
        label: "Branch".to_string(),
        address: "Naka, Nagoya".to_string(),
        phone: None,
    })
    .await
    .unwrap();
    api.update_ship_to(
        &ShipToId::new("st-3"),
        &ShipToUpdate {
            label: Some("Branch 2".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/ship-tos");
    assert_eq!(
        requests[0].json(),
        json!({"label": "Branch", "address": "Naka, Nagoya"})
    );
    assert_eq!(requests[1].method, "PATCH");
    assert_eq!(requests[1].path, "/ship-tos/st-3");
    assert_eq!(requests[1].json(), json!({"label": "Branch 2"}));
}

#[tokio::test]
async fn test_http_errors_are_surfaced() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::error(500, "database unavailable"))
        .await;

    let err = api.orders(None).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("database unavailable"));

    // One attempt only.
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_malformed_list_is_parse_error() {
    let (backend, api) = api_with_backend().await;
    backend.enqueue(MockResponse::json(r#"{"data": "nope"}"#)).await;

    assert!(matches!(
        api.ship_tos().await,
        Err(FetchError::ParseError(_))
    ));
}

#[tokio::test]
async fn test_timeout() {
    let (backend, api) = api_with_backend().await;
    let api = api.with_timeout(Duration::from_millis(50));
    backend
        .enqueue(MockResponse::json(r#"{"data": []}"#).with_delay(500))
        .await;

    assert!(matches!(api.ship_tos().await, Err(FetchError::Timeout)));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let api = ProcurementApi::new(format!("http://{}", addr)).unwrap();

    assert!(matches!(
        api.farmers().await,
        Err(FetchError::RequestError(_))
    ));
}
