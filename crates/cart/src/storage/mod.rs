//! String key-value storage backends.
//!
//! The cart persists through a generic string-keyed, string-valued medium,
//! the shape of on-device key-value storage. [`FileBackend`] is the shipped
//! medium; [`MemoryBackend`] backs tests and process-local operation.

use async_trait::async_trait;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Errors from the storage medium or the persisted value itself.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a value for the medium failed.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored value exists but does not parse as the expected shape.
    #[error("persisted value under {key:?} is corrupt: {reason}")]
    Corrupt {
        /// Storage key the corrupt value was read from.
        key: String,
        /// Parser message describing the mismatch.
        reason: String,
    },
}

/// A string-keyed, string-valued persistent storage medium.
///
/// A single-key write is atomic from the caller's perspective; no guarantee
/// spans more than one key.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Raw stored value for `key`, or `None` if never written or cleared.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored value for `key`.
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove every key from the medium, not just the cart's.
    async fn clear_all(&self) -> Result<(), StorageError>;
}
