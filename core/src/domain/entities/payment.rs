//! Payment entity recording a completed purchase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded purchase.
///
/// Immutable after creation: there is no update or delete path for
/// payments. The referenced bank account must belong to the owner of
/// the referenced product; that invariant is checked before insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for the payment
    pub id: Uuid,

    /// Seller bank account the buyer paid into
    pub bank_account_id: Uuid,

    /// Reference to the uploaded payment proof image
    pub payment_proof_image_url: String,

    /// Purchased quantity, always positive
    pub quantity: i64,

    /// Product purchased
    pub product_id: Uuid,

    /// Buyer
    pub user_id: Uuid,

    /// Timestamp when the payment was recorded
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new Payment made by `user_id` (the buyer).
    pub fn new(
        bank_account_id: Uuid,
        payment_proof_image_url: String,
        quantity: i64,
        product_id: Uuid,
        user_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank_account_id,
            payment_proof_image_url,
            quantity,
            product_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
