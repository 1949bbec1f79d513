//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! blob store is absent when storage is not configured; the upload route
//! reports that as 503 instead of refusing to boot.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::blob::{AzureBlobStore, BlobError, BlobStore};

/// Clone is required by Axum; inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub blob: Option<Arc<dyn BlobStore>>,
    pub upload_max_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(blob: Option<Arc<dyn BlobStore>>, upload_max_bytes: usize) -> Self {
        Self { blob, upload_max_bytes }
    }

    /// Build state from typed config, wiring the Azure store when configured.
    ///
    /// # Errors
    ///
    /// Returns a [`BlobError`] if the blob HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, BlobError> {
        let blob = match &config.blob {
            Some(blob_config) => Some(Arc::new(AzureBlobStore::new(blob_config)?) as Arc<dyn BlobStore>),
            None => None,
        };
        Ok(Self::new(blob, config.upload_max_bytes))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    pub const MOCK_CONTAINER_URL: &str = "https://blob.test/uploads";

    /// One recorded `put` call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StoredBlob {
        pub key: String,
        pub content_type: String,
        pub bytes: Vec<u8>,
    }

    /// In-memory blob store that records writes, or fails every write.
    #[derive(Default)]
    pub struct MockBlobStore {
        pub stored: Mutex<Vec<StoredBlob>>,
        pub fail: bool,
    }

    impl MockBlobStore {
        #[must_use]
        pub fn failing() -> Self {
            Self { stored: Mutex::new(Vec::new()), fail: true }
        }
    }

    #[async_trait::async_trait]
    impl BlobStore for MockBlobStore {
        async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, BlobError> {
            if self.fail {
                return Err(BlobError::Rejected { status: 403, body: "AuthenticationFailed".into() });
            }
            self.stored.lock().unwrap().push(StoredBlob {
                key: key.to_owned(),
                content_type: content_type.to_owned(),
                bytes,
            });
            Ok(format!("{MOCK_CONTAINER_URL}/{key}"))
        }
    }

    /// App state backed by `store`, with a 1 KiB upload limit.
    #[must_use]
    pub fn test_app_state(store: Arc<MockBlobStore>) -> AppState {
        AppState::new(Some(store as Arc<dyn BlobStore>), 1024)
    }

    /// App state with no blob store configured.
    #[must_use]
    pub fn unconfigured_app_state() -> AppState {
        AppState::new(None, 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_without_blob_leaves_store_unset() {
        let config = ServerConfig { port: 3000, upload_max_bytes: 42, blob: None };
        let state = AppState::from_config(&config).unwrap();
        assert!(state.blob.is_none());
        assert_eq!(state.upload_max_bytes, 42);
    }

    #[test]
    fn from_config_with_blob_builds_store() {
        let config = ServerConfig::from_lookup(|key| match key {
            "AZURE_STORAGE_ACCOUNT_NAME" => Some("tutorme".into()),
            "AZURE_STORAGE_CONTAINER_NAME" => Some("uploads".into()),
            "AZURE_STORAGE_SAS_TOKEN" => Some("sig=abc".into()),
            _ => None,
        })
        .unwrap();
        let state = AppState::from_config(&config).unwrap();
        assert!(state.blob.is_some());
    }
}
