//! Bank account repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::BankAccount;
use crate::errors::DomainError;

/// Persistence operations for seller bank accounts.
#[async_trait]
pub trait BankAccountRepository: Send + Sync {
    /// All bank accounts owned by a user
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<BankAccount>, DomainError>;

    /// Find a bank account by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BankAccount>, DomainError>;

    /// Insert a new bank account
    async fn create(&self, account: BankAccount) -> Result<BankAccount, DomainError>;

    /// Overwrite an existing bank account's mutable fields
    async fn update(&self, account: BankAccount) -> Result<BankAccount, DomainError>;

    /// Delete a bank account; `false` when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
