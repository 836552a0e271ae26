//! HTTP client for an S3-compatible object store.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

use mercato_core::errors::DomainError;
use mercato_core::services::ImageStore;
use mercato_shared::config::StorageConfig;

/// Uploads images over the object store's HTTP API and returns the
/// public URL under which the object is served.
///
/// Object keys are prefixed with a random UUID so concurrent uploads
/// of the same filename never collide.
pub struct HttpImageStore {
    client: Client,
    config: StorageConfig,
}

impl HttpImageStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn object_key(filename: &str) -> String {
        format!("{}-{}", Uuid::new_v4(), filename)
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, DomainError> {
        let key = Self::object_key(filename);
        let url = format!("{}/{}/{}", self.config.endpoint, self.config.bucket, key);

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "image/jpeg")
            .body(bytes)
            .send()
            .await
            .map_err(|e| DomainError::Internal(format!("Image upload request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Internal(format!(
                "Image upload rejected: {} - {}",
                status, body
            )));
        }

        debug!(key = %key, "image stored");
        Ok(format!("{}/{}", self.config.public_url, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keys_are_unique_per_upload() {
        let a = HttpImageStore::object_key("proof.jpg");
        let b = HttpImageStore::object_key("proof.jpg");
        assert_ne!(a, b);
        assert!(a.ends_with("-proof.jpg"));
    }
}
