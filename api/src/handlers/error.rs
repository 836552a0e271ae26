//! Maps domain errors to HTTP responses.
//!
//! The one place in the API that knows about status codes. Handlers
//! return `Result<HttpResponse, HttpError>` and propagate domain
//! failures with `?`.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use mercato_core::errors::DomainError;
use mercato_shared::types::ApiError;

/// Newtype carrying a domain error across the actix boundary.
#[derive(Debug)]
pub struct HttpError(pub DomainError);

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::BadRequest(_)
            | DomainError::Validation { .. }
            | DomainError::InvalidCredential => StatusCode::BAD_REQUEST,
            DomainError::Unauthorized
            | DomainError::InvalidToken
            | DomainError::TokenExpired => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
            DomainError::Database(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match &self.0 {
            // Store and internal details stay in the logs
            DomainError::Database(detail) | DomainError::Internal(detail) => {
                error!(detail = %detail, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ApiError::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::validation("name", "is too short"), 400),
            (DomainError::InvalidCredential, 400),
            (DomainError::Unauthorized, 401),
            (DomainError::TokenExpired, 401),
            (DomainError::forbidden(), 403),
            (DomainError::not_found("product"), 404),
            (DomainError::AlreadyExists("username".to_string()), 409),
            (DomainError::Database("boom".to_string()), 500),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError(err).status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_database_detail_is_not_exposed() {
        let response = HttpError(DomainError::Database("password leak".to_string()))
            .error_response();
        assert_eq!(response.status().as_u16(), 500);
    }
}
