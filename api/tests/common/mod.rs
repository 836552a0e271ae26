//! Shared setup for the HTTP integration tests: the full app wired
//! over the in-memory repositories.

use std::sync::Arc;

use actix_web::web;

use mercato_api::state::AppState;
use mercato_core::repositories::mock::{
    MemoryBankAccountRepository, MemoryImageStore, MemoryPaymentRepository,
    MemoryProductRepository, MemoryStore, MemoryUserRepository,
};
use mercato_core::services::{
    AuthService, BankAccountService, ImageStore, PaymentService, ProductService, TokenService,
};
use mercato_shared::config::AuthConfig;

pub type MockState = AppState<
    MemoryUserRepository,
    MemoryProductRepository,
    MemoryBankAccountRepository,
    MemoryPaymentRepository,
>;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        token_expiry_minutes: 2,
        // low cost keeps the tests fast
        bcrypt_cost: 4,
    }
}

/// Full application state over in-memory stores.
///
/// Returns the raw store too so tests can inspect persisted rows and
/// trip the simulated purchase failure.
pub fn test_state() -> (web::Data<MockState>, Arc<MemoryStore>, Arc<TokenService>) {
    let config = test_config();
    let store = MemoryStore::new();

    let users = Arc::new(MemoryUserRepository::new(Arc::clone(&store)));
    let products = Arc::new(MemoryProductRepository::new(Arc::clone(&store)));
    let bank_accounts = Arc::new(MemoryBankAccountRepository::new(Arc::clone(&store)));
    let payments = Arc::new(MemoryPaymentRepository::new(Arc::clone(&store)));

    let tokens = Arc::new(TokenService::new(&config));
    let images: Arc<dyn ImageStore> = Arc::new(MemoryImageStore::new());

    let state = web::Data::new(AppState {
        auth: AuthService::new(Arc::clone(&users), Arc::clone(&tokens), config.bcrypt_cost),
        products: ProductService::new(
            Arc::clone(&products),
            Arc::clone(&users),
            Arc::clone(&bank_accounts),
        ),
        bank_accounts: BankAccountService::new(bank_accounts),
        payments: PaymentService::new(payments),
        tokens: Arc::clone(&tokens),
        images,
    });

    (state, store, tokens)
}

/// A token service sharing the test secret but with a different
/// expiry; negative minutes mint already-expired tokens.
pub fn token_service_with_expiry(minutes: i64) -> TokenService {
    TokenService::new(&AuthConfig {
        token_expiry_minutes: minutes,
        ..test_config()
    })
}

pub fn register_body(name: &str, username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "username": username, "password": password })
}

pub fn product_body(name: &str, price: i64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "price": price,
        "imageUrl": "https://cdn.example.com/item.jpg",
        "stock": 5,
        "condition": "new",
        "tags": ["tools"],
        "isPurchasable": true,
    })
}

pub fn bank_account_body(holder: &str) -> serde_json::Value {
    serde_json::json!({
        "bankName": "First Bank",
        "bankAccountName": holder,
        "bankAccountNumber": "1234567890",
    })
}

/// Registers a user through the HTTP API and returns their token.
pub async fn register<S, B>(app: &S, name: &str, username: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/v1/user/register")
        .set_json(register_body(name, username, "secret1"))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    body["data"]["accessToken"].as_str().unwrap().to_string()
}

/// Creates a product through the HTTP API and returns its wire form.
pub async fn create_product<S, B>(
    app: &S,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/v1/product")
        .insert_header((
            actix_web::http::header::AUTHORIZATION,
            format!("Bearer {token}"),
        ))
        .set_json(body)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    body["data"].clone()
}
