//! In-memory storage for tests and process-local operation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StorageBackend, StorageError};

/// Key-value medium whose contents die with the process.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory medium.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), StorageError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_load_clear() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.load("k").await.unwrap(), None);

        backend.save("k", "v").await.unwrap();
        assert_eq!(backend.load("k").await.unwrap(), Some("v".to_string()));

        backend.save("other", "w").await.unwrap();
        backend.clear_all().await.unwrap();
        assert_eq!(backend.load("k").await.unwrap(), None);
        assert_eq!(backend.load("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let backend = MemoryBackend::new();
        backend.save("k", "v1").await.unwrap();
        backend.save("k", "v2").await.unwrap();
        assert_eq!(backend.load("k").await.unwrap(), Some("v2".to_string()));
    }
}
