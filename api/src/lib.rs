//! # Mercato API
//!
//! HTTP layer for the Mercato marketplace: request/response DTOs, JWT
//! middleware, route handlers, and the application factory. All
//! business rules live in `mercato_core`; this crate only translates
//! between HTTP and the domain services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
