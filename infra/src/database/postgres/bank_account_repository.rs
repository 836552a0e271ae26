//! Postgres implementation of the BankAccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use mercato_core::domain::entities::BankAccount;
use mercato_core::errors::DomainError;
use mercato_core::repositories::BankAccountRepository;

/// Postgres-backed bank account store.
pub struct PgBankAccountRepository {
    pool: PgPool,
}

impl PgBankAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<BankAccount, DomainError> {
        Ok(BankAccount {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            bank_name: row
                .try_get("bank_name")
                .map_err(|e| DomainError::Database(format!("Failed to get bank_name: {}", e)))?,
            bank_account_name: row.try_get("bank_account_name").map_err(|e| {
                DomainError::Database(format!("Failed to get bank_account_name: {}", e))
            })?,
            bank_account_number: row.try_get("bank_account_number").map_err(|e| {
                DomainError::Database(format!("Failed to get bank_account_number: {}", e))
            })?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| DomainError::Database(format!("Failed to get user_id: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl BankAccountRepository for PgBankAccountRepository {
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<BankAccount>, DomainError> {
        let query = r#"
            SELECT id, bank_name, bank_account_name, bank_account_number,
                   user_id, created_at
            FROM bank_accounts
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BankAccount>, DomainError> {
        let query = r#"
            SELECT id, bank_name, bank_account_name, bank_account_number,
                   user_id, created_at
            FROM bank_accounts
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: BankAccount) -> Result<BankAccount, DomainError> {
        let query = r#"
            INSERT INTO bank_accounts (id, bank_name, bank_account_name,
                                       bank_account_number, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(account.id)
            .bind(&account.bank_name)
            .bind(&account.bank_account_name)
            .bind(&account.bank_account_number)
            .bind(account.user_id)
            .bind(account.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database insert failed: {}", e)))?;

        Ok(account)
    }

    async fn update(&self, account: BankAccount) -> Result<BankAccount, DomainError> {
        let query = r#"
            UPDATE bank_accounts
            SET bank_name = $2, bank_account_name = $3, bank_account_number = $4
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(account.id)
            .bind(&account.bank_name)
            .bind(&account.bank_account_name)
            .bind(&account.bank_account_number)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("bank account"));
        }
        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM bank_accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database delete failed: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
