//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs whose only claim beyond issued-at/expiry is
//! the user id. Lifetime is minutes-scale by design; callers are
//! expected to re-authenticate frequently.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mercato_shared::config::AuthConfig;

use crate::errors::DomainError;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    pub user_id: Uuid,

    /// Issued-at, seconds since epoch
    pub iat: i64,

    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Service issuing and verifying session tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_minutes: i64,
}

impl TokenService {
    /// Creates a token service from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            expiry_minutes: config.token_expiry_minutes,
        }
    }

    /// Issues a signed token bound to `user_id`.
    pub fn issue(&self, user_id: Uuid) -> Result<String, DomainError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expiry_minutes)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Internal("failed to generate access token".to_string()))
    }

    /// Verifies signature and expiry, distinguishing an expired token
    /// from an invalid one so callers can react differently.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => DomainError::TokenExpired,
                _ => DomainError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiry_minutes: i64) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_expiry_minutes: expiry_minutes,
            bcrypt_cost: 4,
        })
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = service(2);
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 120);
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let tokens = service(-5);
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        assert_eq!(tokens.verify(&token), Err(DomainError::TokenExpired));
    }

    #[test]
    fn test_garbage_token_is_invalid_not_expired() {
        let tokens = service(2);
        assert_eq!(
            tokens.verify("not.a.token"),
            Err(DomainError::InvalidToken)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = service(2);
        let verifier = TokenService::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            token_expiry_minutes: 2,
            bcrypt_cost: 4,
        });

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert_eq!(verifier.verify(&token), Err(DomainError::InvalidToken));
    }
}
