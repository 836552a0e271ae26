//! The purchase flow end to end: happy path, seller mismatch, and
//! atomic rollback.

mod common;

use std::sync::atomic::Ordering;

use actix_web::http::header;
use actix_web::test;

use common::{create_product, register};
use mercato_api::app::create_app;

async fn add_bank_account<S, B>(app: &S, token: &str, holder: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let req = test::TestRequest::post()
        .uri("/v1/bank/account")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(common::bank_account_body(holder))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    body["data"]["id"].as_str().unwrap().to_string()
}

fn purchase_body(bank_account_id: &str, quantity: i64) -> serde_json::Value {
    serde_json::json!({
        "bankAccountId": bank_account_id,
        "paymentProofImageUrl": "https://cdn.example.com/proof.jpg",
        "quantity": quantity,
    })
}

#[actix_web::test]
async fn test_purchase_bumps_counters_and_keeps_stock() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let seller = register(&app, "Seller One", "seller1").await;
    let buyer = register(&app, "Buyer One", "buyer01").await;
    let account = add_bank_account(&app, &seller, "Seller One").await;
    let product = create_product(&app, &seller, common::product_body("Vintage lamp", 1000)).await;
    let product_id = product["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/product/{product_id}/buy"))
        .insert_header((header::AUTHORIZATION, format!("Bearer {buyer}")))
        .set_json(purchase_body(&account, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Payment processed successfully");
    assert_eq!(body["data"]["quantity"], 2);

    // Counters moved by the purchased quantity
    let req = test::TestRequest::get()
        .uri(&format!("/v1/product/{product_id}"))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["seller"]["productSoldTotal"], 2);
    assert_eq!(body["data"]["product"]["purchaseCount"], 2);

    // Stock is untouched by purchases
    let req = test::TestRequest::get()
        .uri(&format!("/v1/product/{product_id}/stock"))
        .insert_header((header::AUTHORIZATION, format!("Bearer {seller}")))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["stock"], 5);
}

#[actix_web::test]
async fn test_buyers_own_bank_account_is_rejected_before_any_write() {
    let (state, store, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let seller = register(&app, "Seller One", "seller1").await;
    let buyer = register(&app, "Buyer One", "buyer01").await;
    // The buyer's account does not belong to the product's seller
    let account = add_bank_account(&app, &buyer, "Buyer One").await;
    let product = create_product(&app, &seller, common::product_body("Vintage lamp", 1000)).await;
    let product_id = product["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/product/{product_id}/buy"))
        .insert_header((header::AUTHORIZATION, format!("Bearer {buyer}")))
        .set_json(purchase_body(&account, 1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "bank account and product do not belong to the same seller"
    );

    assert!(store.payments.read().await.is_empty());
    let req = test::TestRequest::get()
        .uri(&format!("/v1/product/{product_id}"))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["seller"]["productSoldTotal"], 0);
    assert_eq!(body["data"]["product"]["purchaseCount"], 0);
}

#[actix_web::test]
async fn test_store_failure_leaves_no_partial_state() {
    let (state, store, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let seller = register(&app, "Seller One", "seller1").await;
    let buyer = register(&app, "Buyer One", "buyer01").await;
    let account = add_bank_account(&app, &seller, "Seller One").await;
    let product = create_product(&app, &seller, common::product_body("Vintage lamp", 1000)).await;
    let product_id = product["id"].as_str().unwrap();

    store.fail_purchase.store(true, Ordering::SeqCst);

    let req = test::TestRequest::post()
        .uri(&format!("/v1/product/{product_id}/buy"))
        .insert_header((header::AUTHORIZATION, format!("Bearer {buyer}")))
        .set_json(purchase_body(&account, 3))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    assert!(store.payments.read().await.is_empty());
    store.fail_purchase.store(false, Ordering::SeqCst);
    let req = test::TestRequest::get()
        .uri(&format!("/v1/product/{product_id}"))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["seller"]["productSoldTotal"], 0);
    assert_eq!(body["data"]["product"]["purchaseCount"], 0);
}

#[actix_web::test]
async fn test_zero_quantity_is_rejected() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let seller = register(&app, "Seller One", "seller1").await;
    let buyer = register(&app, "Buyer One", "buyer01").await;
    let account = add_bank_account(&app, &seller, "Seller One").await;
    let product = create_product(&app, &seller, common::product_body("Vintage lamp", 1000)).await;
    let product_id = product["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/product/{product_id}/buy"))
        .insert_header((header::AUTHORIZATION, format!("Bearer {buyer}")))
        .set_json(purchase_body(&account, 0))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_purchase_requires_authentication() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let seller = register(&app, "Seller One", "seller1").await;
    let account = add_bank_account(&app, &seller, "Seller One").await;
    let product = create_product(&app, &seller, common::product_body("Vintage lamp", 1000)).await;
    let product_id = product["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/product/{product_id}/buy"))
        .set_json(purchase_body(&account, 1))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}
