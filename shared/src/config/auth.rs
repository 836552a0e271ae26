//! Authentication configuration module

use serde::{Deserialize, Serialize};

/// Authentication and token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign session tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in minutes.
    ///
    /// Deliberately short: callers are expected to re-authenticate
    /// frequently.
    pub token_expiry_minutes: i64,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

/// Matches bcrypt::DEFAULT_COST without pulling bcrypt into this crate
const DEFAULT_BCRYPT_COST: u32 = 12;

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me"),
            token_expiry_minutes: 2,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me".to_string());
        let token_expiry_minutes = std::env::var("TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self {
            jwt_secret,
            token_expiry_minutes,
            bcrypt_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_is_minutes_scale() {
        let config = AuthConfig::default();
        assert_eq!(config.token_expiry_minutes, 2);
    }
}
