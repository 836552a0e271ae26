//! Ownership guard.
//!
//! A single check used on every mutation of an owned resource. Callers
//! run it after the lookup fetch and before any write; an absent
//! resource is reported as `NotFound` before this guard ever runs, a
//! present-but-not-owned resource as `Forbidden` here. Ownership is
//! never cached across requests.

use uuid::Uuid;

use crate::errors::DomainError;

/// Confirms the acting user owns the resource.
pub fn ensure_owner(owner_id: Uuid, caller_id: Uuid) -> Result<(), DomainError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(DomainError::forbidden())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        let id = Uuid::new_v4();
        assert!(ensure_owner(id, id).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(Uuid::new_v4(), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }
}
