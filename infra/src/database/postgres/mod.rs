//! Postgres implementations of the core repository traits.

pub mod bank_account_repository;
pub mod payment_repository;
pub mod product_repository;
pub mod user_repository;

pub use bank_account_repository::PgBankAccountRepository;
pub use payment_repository::PgPaymentRepository;
pub use product_repository::PgProductRepository;
pub use user_repository::PgUserRepository;

use mercato_core::errors::DomainError;

/// Postgres error code for a unique constraint violation.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";

/// Maps a sqlx error to the domain, surfacing unique violations as
/// `AlreadyExists` on the given field.
pub(crate) fn map_insert_error(err: sqlx::Error, unique_field: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::AlreadyExists(unique_field.to_string());
        }
    }
    DomainError::Database(format!("insert failed: {}", err))
}
