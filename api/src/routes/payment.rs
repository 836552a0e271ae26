//! Purchase handler.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_shared::types::ApiResponse;

use crate::dto::payment::{PaymentData, PurchaseRequest};
use crate::handlers::HttpError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// POST /v1/product/{id}/buy
pub async fn buy<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<PurchaseRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let payment = state
        .payments
        .create(auth.user_id, path.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Payment processed successfully",
        PaymentData::from(payment),
    )))
}
