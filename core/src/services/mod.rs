//! Domain services.

pub mod auth;
pub mod bank_account;
pub mod image;
pub mod ownership;
pub mod payment;
pub mod product;
pub mod token;

pub use auth::{AuthOutcome, AuthService};
pub use bank_account::{BankAccountInput, BankAccountService};
pub use image::ImageStore;
pub use ownership::ensure_owner;
pub use payment::{PaymentService, PurchaseInput};
pub use product::{ProductDetail, ProductInput, ProductListQuery, ProductService, SellerSummary};
pub use token::{Claims, TokenService};
