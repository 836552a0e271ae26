//! Object storage configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the S3-compatible object store holding product
/// and payment-proof images.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base URL of the storage HTTP API
    pub endpoint: String,

    /// Bucket that holds uploaded images
    pub bucket: String,

    /// API key sent as a bearer token on uploads
    pub api_key: String,

    /// Public base URL under which stored objects are served
    pub public_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("http://localhost:9000"),
            bucket: String::from("mercato-images"),
            api_key: String::new(),
            public_url: String::from("http://localhost:9000/mercato-images"),
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: std::env::var("STORAGE_ENDPOINT").unwrap_or(defaults.endpoint),
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or(defaults.bucket),
            api_key: std::env::var("STORAGE_API_KEY").unwrap_or(defaults.api_key),
            public_url: std::env::var("STORAGE_PUBLIC_URL").unwrap_or(defaults.public_url),
        }
    }
}
