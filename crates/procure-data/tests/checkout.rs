//! Cart submission: the cart is cleared only when the order is accepted.

mod common;

use common::{api_with_backend, MockResponse};
use procure_commerce::prelude::*;
use procure_data::{submit_cart, CheckoutError};

fn ready_store() -> CartStore {
    let store = CartStore::new();
    store.set_farmer(FarmerId::new("00000000-0000-0000-0000-000000000002"));
    store.set_ship_to(ShipToId::new("st-1"));
    store.add_item(CartItem::new("p1", "Spinach", 2, Money::new(100)));
    store.add_item(CartItem::new("p2", "Daikon", 1, Money::new(250)));
    store.set_discount(Money::new(50));
    store
}

#[tokio::test]
async fn test_successful_submission_clears_cart() {
    let (backend, api) = api_with_backend().await;
    backend
        .enqueue(MockResponse::json(r#"{"data": {"id": "o-77"}}"#))
        .await;
    let store = ready_store();

    let confirmation = submit_cart(&api, &store, Currency::JPY).await.unwrap();
    assert_eq!(confirmation.id, Some(OrderId::new("o-77")));
    assert_eq!(store.snapshot(), Cart::default());

    let body = backend.single_request().await.json();
    assert_eq!(body["farmerCompanyId"], "00000000-0000-0000-0000-000000000002");
    assert_eq!(body["shipToId"], "st-1");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][1]["productId"], "p2");
    assert_eq!(body["discountAmount"], 50.0);
}

#[tokio::test]
async fn test_failed_submission_keeps_cart() {
    let (backend, api) = api_with_backend().await;
    backend.enqueue(MockResponse::error(422, "out of stock")).await;
    let store = ready_store();
    let before = store.snapshot();

    let err = submit_cart(&api, &store, Currency::JPY).await.unwrap_err();
    assert!(matches!(err, CheckoutError::Remote(_)));
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_incomplete_cart_sends_nothing() {
    let (backend, api) = api_with_backend().await;
    let store = CartStore::new();
    store.add_item(CartItem::new("p1", "Spinach", 1, Money::new(100)));

    let err = submit_cart(&api, &store, Currency::JPY).await.unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::Incomplete(CommerceError::MissingShipTo)
    ));

    store.set_ship_to(ShipToId::new("st-1"));
    store.set_farmer(FarmerId::new("f-1"));
    store.remove_item(&ProductId::new("p1"));
    let err = submit_cart(&api, &store, Currency::JPY).await.unwrap_err();
    assert!(matches!(err, CheckoutError::Incomplete(CommerceError::EmptyCart)));

    assert!(backend.captured_requests().await.is_empty());
}
