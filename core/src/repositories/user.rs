//! User repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Persistence operations for users.
///
/// `create` must treat the store's uniqueness constraint on username
/// as authoritative: a concurrent duplicate insert fails there and is
/// reported as `AlreadyExists`, never as a raw server error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by lowercased username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Whether a user with this username exists
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Insert a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
