//! Bank account DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mercato_core::domain::entities::BankAccount;
use mercato_core::services::BankAccountInput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRequest {
    pub bank_name: String,
    pub bank_account_name: String,
    pub bank_account_number: String,
}

impl From<BankAccountRequest> for BankAccountInput {
    fn from(req: BankAccountRequest) -> Self {
        Self {
            bank_name: req.bank_name,
            bank_account_name: req.bank_account_name,
            bank_account_number: req.bank_account_number,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountData {
    pub id: Uuid,
    pub bank_name: String,
    pub bank_account_name: String,
    pub bank_account_number: String,
}

impl From<BankAccount> for BankAccountData {
    fn from(account: BankAccount) -> Self {
        Self {
            id: account.id,
            bank_name: account.bank_name,
            bank_account_name: account.bank_account_name,
            bank_account_number: account.bank_account_number,
        }
    }
}
