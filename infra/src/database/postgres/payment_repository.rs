//! Postgres implementation of the PaymentRepository trait.
//!
//! `record_purchase` is the only multi-statement write in the system
//! and runs inside one transaction: the payment insert and both
//! counter updates commit together or roll back together.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use mercato_core::domain::entities::Payment;
use mercato_core::errors::DomainError;
use mercato_core::repositories::PaymentRepository;

/// Postgres-backed purchase store.
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    async fn seller_for_purchase(
        &self,
        bank_account_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<Uuid>, DomainError> {
        // Single join so both rows are read at the same point in time
        let query = r#"
            SELECT products.user_id
            FROM products
            JOIN bank_accounts ON bank_accounts.user_id = products.user_id
            WHERE bank_accounts.id = $1 AND products.id = $2
            LIMIT 1
        "#;

        let seller: Option<Uuid> = sqlx::query_scalar(query)
            .bind(bank_account_id)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        Ok(seller)
    }

    async fn record_purchase(
        &self,
        payment: Payment,
        seller_id: Uuid,
    ) -> Result<Payment, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to begin transaction: {}", e)))?;

        let insert = r#"
            INSERT INTO payments (id, bank_account_id, payment_proof_image_url,
                                  quantity, product_id, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;
        sqlx::query(insert)
            .bind(payment.id)
            .bind(payment.bank_account_id)
            .bind(&payment.payment_proof_image_url)
            .bind(payment.quantity)
            .bind(payment.product_id)
            .bind(payment.user_id)
            .bind(payment.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database(format!("Payment insert failed: {}", e)))?;

        let bump_seller = r#"
            UPDATE users
            SET product_sold_total = product_sold_total + $2, updated_at = NOW()
            WHERE id = $1
        "#;
        let updated = sqlx::query(bump_seller)
            .bind(seller_id)
            .bind(payment.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database(format!("Seller counter update failed: {}", e)))?;
        if updated.rows_affected() == 0 {
            warn!(seller_id = %seller_id, "seller row vanished mid-purchase");
            return Err(DomainError::Database("seller no longer exists".to_string()));
        }

        let bump_product = r#"
            UPDATE products
            SET purchase_count = purchase_count + $2, updated_at = NOW()
            WHERE id = $1
        "#;
        let updated = sqlx::query(bump_product)
            .bind(payment.product_id)
            .bind(payment.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database(format!("Product counter update failed: {}", e)))?;
        if updated.rows_affected() == 0 {
            warn!(product_id = %payment.product_id, "product row vanished mid-purchase");
            return Err(DomainError::Database("product no longer exists".to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit purchase: {}", e)))?;

        Ok(payment)
    }
}
