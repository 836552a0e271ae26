//! Image storage interface.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Object storage for uploaded images.
///
/// Implementations receive already-validated file contents and answer
/// with a publicly reachable URL.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the file and return its public URL.
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, DomainError>;
}
