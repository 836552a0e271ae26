//! Purchase DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mercato_core::domain::entities::Payment;
use mercato_core::services::PurchaseInput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub bank_account_id: Uuid,
    pub payment_proof_image_url: String,
    pub quantity: i64,
}

impl From<PurchaseRequest> for PurchaseInput {
    fn from(req: PurchaseRequest) -> Self {
        Self {
            bank_account_id: req.bank_account_id,
            payment_proof_image_url: req.payment_proof_image_url,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub id: Uuid,
    pub bank_account_id: Uuid,
    pub payment_proof_image_url: String,
    pub quantity: i64,
    pub product_id: Uuid,
}

impl From<Payment> for PaymentData {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            bank_account_id: payment.bank_account_id,
            payment_proof_image_url: payment.payment_proof_image_url,
            quantity: payment.quantity,
            product_id: payment.product_id,
        }
    }
}
