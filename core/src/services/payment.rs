//! The purchase flow.
//!
//! The one place in the system where a multi-statement write must be a
//! single transaction: the payment insert and both counter updates
//! happen inside one `record_purchase` call that the store implements
//! transactionally with rollback on any failure.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::Payment;
use crate::errors::DomainError;
use crate::repositories::PaymentRepository;
use crate::validation;

/// Fields accepted on a purchase request.
#[derive(Debug, Clone)]
pub struct PurchaseInput {
    pub bank_account_id: Uuid,
    pub payment_proof_image_url: String,
    pub quantity: i64,
}

/// Purchase/payment service.
pub struct PaymentService<Y: PaymentRepository> {
    payments: Arc<Y>,
}

impl<Y: PaymentRepository> PaymentService<Y> {
    pub fn new(payments: Arc<Y>) -> Self {
        Self { payments }
    }

    /// Records a purchase of `product_id` by `buyer`.
    ///
    /// Order of operations: input validation, then the seller linkage
    /// check (bank account and product must share an owner), then the
    /// atomic write. A linkage mismatch rejects before any write.
    /// Stock is deliberately not decremented here.
    pub async fn create(
        &self,
        buyer: Uuid,
        product_id: Uuid,
        input: PurchaseInput,
    ) -> Result<Payment, DomainError> {
        validation::validate_purchase(input.quantity, &input.payment_proof_image_url)?;

        let seller = self
            .payments
            .seller_for_purchase(input.bank_account_id, product_id)
            .await?
            .ok_or_else(|| {
                DomainError::BadRequest(
                    "bank account and product do not belong to the same seller".to_string(),
                )
            })?;

        let payment = Payment::new(
            input.bank_account_id,
            input.payment_proof_image_url,
            input.quantity,
            product_id,
            buyer,
        );

        let payment = self.payments.record_purchase(payment, seller).await?;
        info!(
            payment_id = %payment.id,
            product_id = %product_id,
            quantity = payment.quantity,
            "purchase recorded"
        );
        Ok(payment)
    }
}
