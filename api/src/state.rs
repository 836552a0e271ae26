//! Application state shared by all handlers.

use std::sync::Arc;

use mercato_core::repositories::{
    BankAccountRepository, PaymentRepository, ProductRepository, UserRepository,
};
use mercato_core::services::{
    AuthService, BankAccountService, ImageStore, PaymentService, ProductService, TokenService,
};

/// Services wired over concrete repository implementations.
///
/// Generic over the repository traits so integration tests can run the
/// full HTTP stack over the in-memory mocks.
pub struct AppState<U, P, B, Y>
where
    U: UserRepository,
    P: ProductRepository,
    B: BankAccountRepository,
    Y: PaymentRepository,
{
    pub auth: AuthService<U>,
    pub products: ProductService<P, U, B>,
    pub bank_accounts: BankAccountService<B>,
    pub payments: PaymentService<Y>,
    pub tokens: Arc<TokenService>,
    pub images: Arc<dyn ImageStore>,
}
