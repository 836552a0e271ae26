//! Bank account handlers. All routes require authentication.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_shared::types::ApiResponse;

use crate::dto::bank_account::{BankAccountData, BankAccountRequest};
use crate::handlers::HttpError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /v1/bank/account
pub async fn index<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let accounts = state.bank_accounts.index(auth.user_id).await?;
    let data: Vec<BankAccountData> = accounts.into_iter().map(BankAccountData::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::new("Bank accounts fetched successfully", data)))
}

/// POST /v1/bank/account
pub async fn create<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
    body: web::Json<BankAccountRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let account = state
        .bank_accounts
        .create(auth.user_id, body.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        "Bank account added successfully",
        BankAccountData::from(account),
    )))
}

/// PATCH /v1/bank/account/{id}
pub async fn update<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<BankAccountRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let account = state
        .bank_accounts
        .update(auth.user_id, path.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Bank account updated successfully",
        BankAccountData::from(account),
    )))
}

/// DELETE /v1/bank/account/{id}
pub async fn delete<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    state
        .bank_accounts
        .delete(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Bank account deleted successfully",
        serde_json::json!({}),
    )))
}
