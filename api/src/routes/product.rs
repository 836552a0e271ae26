//! Product catalog handlers.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_shared::types::{ApiResponse, PaginatedResponse};

use crate::dto::product::{
    parse_list_query, ProductData, ProductDetailData, ProductRequest, StockData,
};
use crate::handlers::HttpError;
use crate::middleware::{AuthContext, OptionalAuth};
use crate::state::AppState;

/// GET /v1/product
///
/// Optionally authenticated: `userOnly=true` needs a caller, anything
/// else works anonymously.
pub async fn list<U, P, B, Y>(
    req: HttpRequest,
    state: web::Data<AppState<U, P, B, Y>>,
    auth: OptionalAuth,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let query = parse_list_query(req.query_string());
    let caller = auth.0.map(|ctx| ctx.user_id);

    let (items, meta) = state.products.list(query, caller).await?;
    let data: Vec<ProductData> = items.into_iter().map(ProductData::from).collect();

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(
        "Products fetched successfully",
        data,
        meta,
    )))
}

/// GET /v1/product/{id}
pub async fn show<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let detail = state.products.show(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Product fetched successfully",
        ProductDetailData::from(detail),
    )))
}

/// POST /v1/product
pub async fn create<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let input = body.into_inner().into_input()?;
    let product = state.products.create(auth.user_id, input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        "Product added successfully",
        ProductData::from(product),
    )))
}

/// PATCH /v1/product/{id}
pub async fn update<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    let input = body.into_inner().into_input()?;
    let product = state
        .products
        .update(auth.user_id, path.into_inner(), input)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Product updated successfully",
        ProductData::from(product),
    )))
}

/// DELETE /v1/product/{id}
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
        .products
        .delete(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Product deleted successfully",
        serde_json::json!({}),
    )))
}

/// GET /v1/product/{id}/stock
///
/// Visible to the product's owner only.
pub async fn stock<U, P, B, Y>(
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
    let stock = state
        .products
        .stock(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "Stock fetched successfully",
        StockData { stock },
    )))
}
