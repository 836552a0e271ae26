//! JWT authentication middleware.
//!
//! Verifies the `Authorization: Bearer` header against the shared
//! `TokenService` and injects an [`AuthContext`] into the request
//! extensions. Two modes: `required` rejects requests without a valid
//! token, `optional` lets anonymous requests through but still rejects
//! a presented token that fails verification.
//!
//! The three 401 cases stay distinct: missing header, invalid token,
//! expired token.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use mercato_core::errors::DomainError;
use mercato_core::services::TokenService;

use crate::handlers::HttpError;

/// Authenticated caller context injected into requests.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// User id taken from the verified token claims
    pub user_id: Uuid,
}

/// JWT authentication middleware factory.
pub struct JwtAuth {
    tokens: Arc<TokenService>,
    required: bool,
}

impl JwtAuth {
    /// Middleware that rejects requests without a valid token.
    pub fn required(tokens: Arc<TokenService>) -> Self {
        Self {
            tokens,
            required: true,
        }
    }

    /// Middleware that admits anonymous requests but still verifies a
    /// token when one is presented.
    pub fn optional(tokens: Arc<TokenService>) -> Self {
        Self {
            tokens,
            required: false,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
            required: self.required,
        }))
    }
}

/// JWT authentication middleware service.
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);
        let required = self.required;

        Box::pin(async move {
            match extract_bearer_token(&req) {
                Some(token) => {
                    let claims = tokens
                        .verify(&token)
                        .map_err(|e| Error::from(HttpError(e)))?;
                    req.extensions_mut().insert(AuthContext {
                        user_id: claims.user_id,
                    });
                }
                None if required => {
                    return Err(Error::from(HttpError(DomainError::Unauthorized)));
                }
                None => {}
            }

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| Error::from(HttpError(DomainError::Unauthorized)));
        ready(result)
    }
}

/// Extractor for routes where authentication is optional.
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().copied();
        ready(Ok(OptionalAuth(auth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[test]
    async fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
