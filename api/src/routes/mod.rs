//! Route handlers, generic over the repository traits behind the
//! application state.

pub mod auth;
pub mod bank_account;
pub mod health;
pub mod image;
pub mod payment;
pub mod product;
