//! Registration and login handlers.

use actix_web::{web, HttpResponse};

use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_shared::types::ApiResponse;

use crate::dto::auth::{AuthData, LoginRequest, RegisterRequest};
use crate::handlers::HttpError;
use crate::state::AppState;

/// POST /v1/user/register
pub async fn register<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let body = body.into_inner();
    let outcome = state
        .auth
        .register(&body.name, &body.username, &body.password)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        "User registered successfully",
        AuthData::from(outcome),
    )))
}

/// POST /v1/user/login
pub async fn login<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let body = body.into_inner();
    let outcome = state.auth.login(&body.username, &body.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "User logged successfully",
        AuthData::from(outcome),
    )))
}
