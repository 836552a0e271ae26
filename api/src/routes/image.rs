//! Image upload handler.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt as _;

use mercato_core::errors::DomainError;
use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_core::validation::{self, MAX_IMAGE_BYTES};
use mercato_shared::types::ApiResponse;

use crate::dto::image::ImageData;
use crate::handlers::HttpError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// POST /v1/image
///
/// Multipart upload; the image arrives in a field named `file`.
/// Streaming is capped at the size limit so an oversized body is
/// rejected without being buffered in full.
pub async fn upload<U, P, B, Y>(
    state: web::Data<AppState<U, P, B, Y>>,
    _auth: AuthContext,
    mut payload: Multipart,
) -> Result<HttpResponse, HttpError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    B: BankAccountRepository + 'static,
    Y: PaymentRepository + 'static,
{
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| {
            HttpError(DomainError::BadRequest(format!(
                "invalid multipart payload: {}",
                e
            )))
        })?;

        if field.name() != "file" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .unwrap_or_default()
            .to_string();

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                HttpError(DomainError::BadRequest(format!(
                    "failed to read upload: {}",
                    e
                )))
            })?;
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(HttpError(DomainError::validation(
                    "file",
                    "size cannot exceed 2MB",
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        validation::validate_image(&filename, bytes.len())?;
        let image_url = state.images.store(&filename, bytes).await?;

        return Ok(HttpResponse::Ok().json(ApiResponse::new(
            "File uploaded successfully",
            ImageData { image_url },
        )));
    }

    Err(HttpError(DomainError::validation("file", "is required")))
}
