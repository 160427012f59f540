//! JSON file-backed storage.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use super::{StorageBackend, StorageError};

/// Key-value medium persisted as a single JSON object file.
///
/// The whole map is held in memory and rewritten to disk on every change,
/// which is fine at the size of an on-device store. The file is created on
/// the first write when missing.
pub struct FileBackend {
    entries: RwLock<HashMap<String, String>>,
    path: PathBuf,
}

impl FileBackend {
    /// Open the medium at `path`.
    ///
    /// A missing file starts the medium empty. A file that is not valid JSON
    /// also starts it empty, with a warning; the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file or its parent directory cannot
    /// be accessed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let entries = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "backing file is not valid JSON, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            entries: RwLock::new(entries),
            path,
        })
    }

    /// Rewrite the backing file from the in-memory map.
    async fn write_out(&self) -> Result<(), StorageError> {
        let data = {
            let entries = self.entries.read().await;
            serde_json::to_vec(&*entries)?
        };
        fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        self.write_out().await
    }

    async fn clear_all(&self) -> Result<(), StorageError> {
        self.entries.write().await.clear();
        self.write_out().await
    }
}
