//! Request and response DTOs.
//!
//! Wire names are camelCase; domain types stay snake_case. Conversion
//! in and out of the domain happens here, nowhere else.

pub mod auth;
pub mod bank_account;
pub mod image;
pub mod payment;
pub mod product;
