//! Domain entities for the Mercato marketplace.

pub mod bank_account;
pub mod payment;
pub mod product;
pub mod user;

pub use bank_account::BankAccount;
pub use payment::Payment;
pub use product::{Condition, Product};
pub use user::User;
