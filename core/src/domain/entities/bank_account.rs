//! Bank account entity for seller payouts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A seller's payout bank account, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier for the bank account
    pub id: Uuid,

    /// Name of the bank
    pub bank_name: String,

    /// Account holder name
    pub bank_account_name: String,

    /// Account number
    pub bank_account_number: String,

    /// Owning user
    pub user_id: Uuid,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl BankAccount {
    /// Creates a new BankAccount owned by `user_id`.
    pub fn new(
        bank_name: String,
        bank_account_name: String,
        bank_account_number: String,
        user_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank_name,
            bank_account_name,
            bank_account_number,
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bank_account_keeps_owner() {
        let owner = Uuid::new_v4();
        let account = BankAccount::new(
            "First Bank".to_string(),
            "Seller One".to_string(),
            "1234567890".to_string(),
            owner,
        );
        assert_eq!(account.user_id, owner);
    }
}
