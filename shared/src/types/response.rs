//! API response envelope types.
//!
//! Every endpoint answers with the same shape: `{message, data}` on
//! success, `{message}` on failure, and listing endpoints add a
//! `meta` block with pagination figures.

use serde::{Deserialize, Serialize};

use super::PageMeta;

/// Standard success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable outcome message
    pub message: String,

    /// Response payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload with an outcome message
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Success envelope for paginated listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Human-readable outcome message
    pub message: String,

    /// The page of items
    pub data: Vec<T>,

    /// Pagination metadata computed against the same filter
    pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page of items with its metadata
    pub fn new(message: impl Into<String>, data: Vec<T>, meta: PageMeta) -> Self {
        Self {
            message: message.into(),
            data,
            meta,
        }
    }
}

/// Error envelope: message only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let res = ApiResponse::new("ok", serde_json::json!({"id": 1}));
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["message"], "ok");
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn test_error_envelope_has_message_only() {
        let err = ApiError::new("request resource not found");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "request resource not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_paginated_envelope_carries_meta() {
        let meta = PageMeta {
            limit: 10,
            offset: 20,
            total: 57,
        };
        let res = PaginatedResponse::new("ok", vec![1, 2, 3], meta);
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["meta"]["limit"], 10);
        assert_eq!(json["meta"]["offset"], 20);
        assert_eq!(json["meta"]["total"], 57);
    }
}
