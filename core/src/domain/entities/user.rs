//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The username is stored lowercased; the password only as a bcrypt
/// hash. `product_sold_total` is a cumulative counter mutated only by
/// successful purchases of this user's products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique, lowercased username
    pub username: String,

    /// Display name
    pub name: String,

    /// Salted bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Total quantity of this user's products sold
    pub product_sold_total: i64,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with zeroed counters.
    ///
    /// The caller is responsible for lowercasing the username and
    /// hashing the password before construction.
    pub fn new(username: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            product_sold_total: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_with_zero_sold() {
        let user = User::new(
            "seller".to_string(),
            "Seller One".to_string(),
            "$2b$12$hash".to_string(),
        );

        assert_eq!(user.username, "seller");
        assert_eq!(user.product_sold_total, 0);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new(
            "seller".to_string(),
            "Seller One".to_string(),
            "$2b$12$hash".to_string(),
        );
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "seller");
    }
}
