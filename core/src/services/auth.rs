//! Registration and login.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::validation;

use super::token::TokenService;

/// Result of a successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub name: String,
    pub username: String,
    pub access_token: String,
}

/// Service handling user registration and login.
///
/// Password hashing is an ordinary synchronous call inside the request
/// task; bcrypt is slow by construction and needs no extra plumbing.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new user and issues a session token.
    ///
    /// The username is case-normalized to lowercase before the
    /// uniqueness check. The check here is a fast path; the store's
    /// unique constraint is the authoritative guard, and the
    /// repository maps a racing duplicate insert to `AlreadyExists`.
    pub async fn register(
        &self,
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, DomainError> {
        validation::validate_register(name, username, password)?;
        let username = username.to_lowercase();

        if self.users.exists_by_username(&username).await? {
            return Err(DomainError::AlreadyExists("username".to_string()));
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("password hashing failed: {e}")))?;

        let user = User::new(username, name.to_string(), password_hash);
        let user = self.users.create(user).await?;

        let access_token = self.tokens.issue(user.id)?;
        info!(user_id = %user.id, "user registered");

        Ok(AuthOutcome {
            name: user.name,
            username: user.username,
            access_token,
        })
    }

    /// Authenticates an existing user and issues a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome, DomainError> {
        validation::validate_login(username, password)?;
        let username = username.to_lowercase();

        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| DomainError::not_found("username"))?;

        let verified = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(format!("password verification failed: {e}")))?;
        if !verified {
            return Err(DomainError::InvalidCredential);
        }

        let access_token = self.tokens.issue(user.id)?;

        Ok(AuthOutcome {
            name: user.name,
            username: user.username,
            access_token,
        })
    }
}
