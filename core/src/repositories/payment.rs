//! Payment repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Payment;
use crate::errors::DomainError;

/// Persistence operations for the purchase flow.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Resolve the seller id when `bank_account_id` and `product_id`
    /// share an owner; `None` when they do not fit together.
    ///
    /// Implemented as a single join so the consistency check cannot
    /// observe the two rows at different times.
    async fn seller_for_purchase(
        &self,
        bank_account_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<Uuid>, DomainError>;

    /// Record a purchase atomically: insert the payment, add its
    /// quantity to the seller's `product_sold_total` and to the
    /// product's `purchase_count`. All three writes succeed or none
    /// are observable.
    async fn record_purchase(&self, payment: Payment, seller_id: Uuid)
        -> Result<Payment, DomainError>;
}
