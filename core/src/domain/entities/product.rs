//! Product entity and its condition enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical condition of a listed product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Second,
}

impl Condition {
    /// Column value used in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Second => "second",
        }
    }

    /// Parse the stored column value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Condition::New),
            "second" => Some(Condition::Second),
            _ => None,
        }
    }
}

/// A product listed for sale.
///
/// Prices are non-negative integers in currency minor units.
/// `purchase_count` is a cumulative counter mutated only by successful
/// purchases. Stock is a seller-maintained figure; the purchase flow
/// does not decrement it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Product name
    pub name: String,

    /// Price in currency minor units
    pub price: i64,

    /// Reference to the product image
    pub image_url: String,

    /// Units currently in stock
    pub stock: i64,

    /// Condition of the product
    pub condition: Condition,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Whether the product can currently be purchased
    pub is_purchasable: bool,

    /// Total quantity purchased across all payments
    pub purchase_count: i64,

    /// Owning user
    pub user_id: Uuid,

    /// Timestamp when the product was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the product was last updated
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product owned by `user_id` with a zeroed
    /// purchase counter.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        price: i64,
        image_url: String,
        stock: i64,
        condition: Condition,
        tags: Vec<String>,
        is_purchasable: bool,
        user_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            image_url,
            stock,
            condition,
            tags,
            is_purchasable,
            purchase_count: 0,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
