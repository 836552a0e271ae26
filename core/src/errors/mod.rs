//! Domain error taxonomy.
//!
//! One enum covers every failure the services can report. The HTTP
//! layer owns the mapping from these variants to status codes; the
//! services never deal in status codes directly.

use thiserror::Error;

/// Errors surfaced by the domain services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input or a request whose referenced entities do not
    /// fit together (e.g. bank account not owned by the seller)
    #[error("{0}")]
    BadRequest(String),

    /// A field-level rule violation; the message names the field
    #[error("{field} {message}")]
    Validation { field: String, message: String },

    /// Authentication required but no usable token was presented
    #[error("authentication required")]
    Unauthorized,

    /// The presented token failed signature or claim checks
    #[error("token is invalid")]
    InvalidToken,

    /// The presented token is well-formed but past its expiry
    #[error("given security scheme is valid, but the lifetime has expired")]
    TokenExpired,

    /// Login with a wrong password
    #[error("username or password is incorrect")]
    InvalidCredential,

    /// Authenticated caller is not the owner of the resource
    #[error("{0}")]
    Forbidden(String),

    /// The referenced resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness conflict
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Store-level failure
    #[error("database failure: {0}")]
    Database(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Validation failure naming the offending field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Missing resource, named for the error message
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Ownership mismatch with the standard message
    pub fn forbidden() -> Self {
        Self::Forbidden("you do not have access to this resource".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_the_field() {
        let err = DomainError::validation("username", "length must be between 5 and 15");
        assert_eq!(err.to_string(), "username length must be between 5 and 15");
    }

    #[test]
    fn test_expired_and_invalid_tokens_are_distinct() {
        assert_ne!(DomainError::TokenExpired, DomainError::InvalidToken);
    }

    #[test]
    fn test_not_found_names_the_resource() {
        assert_eq!(
            DomainError::not_found("product").to_string(),
            "product not found"
        );
    }
}
