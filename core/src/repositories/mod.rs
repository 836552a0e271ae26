//! Repository traits abstracting the backing store.
//!
//! Implementations live in the infra crate; the in-memory mocks here
//! back the unit and integration tests.

pub mod bank_account;
pub mod mock;
pub mod payment;
pub mod product;
pub mod user;

pub use bank_account::BankAccountRepository;
pub use payment::PaymentRepository;
pub use product::{ProductFilter, ProductRepository, ProductSort, SortOrder};
pub use user::UserRepository;
