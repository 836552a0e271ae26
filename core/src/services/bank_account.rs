//! Bank account CRUD, owned exclusively by one user.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::BankAccount;
use crate::errors::DomainError;
use crate::repositories::BankAccountRepository;
use crate::validation;

use super::ownership::ensure_owner;

/// Fields accepted when creating or updating a bank account.
#[derive(Debug, Clone)]
pub struct BankAccountInput {
    pub bank_name: String,
    pub bank_account_name: String,
    pub bank_account_number: String,
}

impl BankAccountInput {
    fn validate(&self) -> Result<(), DomainError> {
        validation::validate_bank_account(
            &self.bank_name,
            &self.bank_account_name,
            &self.bank_account_number,
        )
    }
}

/// Seller payout bank account service.
pub struct BankAccountService<B: BankAccountRepository> {
    accounts: Arc<B>,
}

impl<B: BankAccountRepository> BankAccountService<B> {
    pub fn new(accounts: Arc<B>) -> Self {
        Self { accounts }
    }

    /// All bank accounts owned by the caller.
    pub async fn index(&self, caller: Uuid) -> Result<Vec<BankAccount>, DomainError> {
        self.accounts.list_by_owner(caller).await
    }

    /// Creates a bank account owned by the caller.
    pub async fn create(
        &self,
        caller: Uuid,
        input: BankAccountInput,
    ) -> Result<BankAccount, DomainError> {
        input.validate()?;

        let account = BankAccount::new(
            input.bank_name,
            input.bank_account_name,
            input.bank_account_number,
            caller,
        );
        self.accounts.create(account).await
    }

    /// Updates a bank account after the ownership check.
    pub async fn update(
        &self,
        caller: Uuid,
        account_id: Uuid,
        input: BankAccountInput,
    ) -> Result<BankAccount, DomainError> {
        input.validate()?;

        let mut account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("bank account"))?;
        ensure_owner(account.user_id, caller)?;

        account.bank_name = input.bank_name;
        account.bank_account_name = input.bank_account_name;
        account.bank_account_number = input.bank_account_number;

        self.accounts.update(account).await
    }

    /// Deletes a bank account after the ownership check.
    pub async fn delete(&self, caller: Uuid, account_id: Uuid) -> Result<(), DomainError> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("bank account"))?;
        ensure_owner(account.user_id, caller)?;

        self.accounts.delete(account_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::mock::{MemoryBankAccountRepository, MemoryStore};

    fn service() -> (BankAccountService<MemoryBankAccountRepository>, Arc<MemoryStore>) {
        let store = MemoryStore::new();
        let service =
            BankAccountService::new(Arc::new(MemoryBankAccountRepository::new(Arc::clone(&store))));
        (service, store)
    }

    fn input() -> BankAccountInput {
        BankAccountInput {
            bank_name: "First Bank".to_string(),
            bank_account_name: "Seller One".to_string(),
            bank_account_number: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_index_lists_only_own_accounts() {
        let (service, _) = service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        service.create(alice, input()).await.unwrap();
        service.create(bob, input()).await.unwrap();

        let accounts = service.index(alice).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].user_id, alice);
    }

    #[tokio::test]
    async fn test_update_as_non_owner_is_forbidden() {
        let (service, _) = service();
        let owner = Uuid::new_v4();
        let account = service.create(owner, input()).await.unwrap();

        let err = service
            .update(Uuid::new_v4(), account.id, input())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_account_is_not_found() {
        let (service, _) = service();
        let err = service
            .delete(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound("bank account".to_string()));
    }

    #[tokio::test]
    async fn test_create_validates_fields() {
        let (service, _) = service();
        let err = service
            .create(
                Uuid::new_v4(),
                BankAccountInput {
                    bank_name: "ab".to_string(),
                    ..input()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "bankName"));
    }
}
