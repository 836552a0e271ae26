//! HTTP middleware.

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, JwtAuth, OptionalAuth};
pub use cors::create_cors;
