//! The serialized copy of the cart.
//!
//! [`PersistedStore`] binds a [`StorageBackend`] to the cart's fixed storage
//! key and the JSON codec for the item list. It holds only bytes, never the
//! live list; the in-memory list in [`CartStore`](crate::store::CartStore)
//! is the single source of truth.

use std::sync::Arc;

use go_marketplace_core::CartItem;

use crate::storage::{StorageBackend, StorageError};

/// Storage key under which the serialized cart lives.
pub const CART_STORAGE_KEY: &str = "@GoMarketplace:products";

/// Read/write access to the persisted cart entry.
#[derive(Clone)]
pub struct PersistedStore {
    backend: Arc<dyn StorageBackend>,
    key: &'static str,
}

impl PersistedStore {
    /// Bind `backend` to the cart's storage key.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            key: CART_STORAGE_KEY,
        }
    }

    /// Load and decode the persisted cart, in stored order.
    ///
    /// An absent key is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` when a value exists but does not parse
    /// as a JSON array of cart items; backend errors pass through.
    pub async fn load_items(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let Some(raw) = self.backend.load(self.key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(Some(items)),
            Err(err) => Err(StorageError::Corrupt {
                key: self.key.to_owned(),
                reason: err.to_string(),
            }),
        }
    }

    /// Encode `items` in list order and overwrite the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub async fn save_items(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.backend.save(self.key, &raw).await
    }

    /// Wipe the whole medium, not just the cart's key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend wipe fails.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        self.backend.clear_all().await
    }
}
