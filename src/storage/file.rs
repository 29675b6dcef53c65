//! File-backed key-value store
//!
//! One JSON file per key under a base directory:
//! ```text
//! <base_dir>/
//! ├── lumi_users_directory.json
//! ├── lumi_alice-1234_sessions.json
//! ├── lumi_alice-1234_msg_1700000000000.json
//! └── ...
//! ```
//! Writes land on disk before the call returns; there is no batching.

use super::backend::KvStore;
use super::key::StorageKey;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Key-value store persisting each key as a file under `base_dir`
pub struct FileKvStore {
    base_dir: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed
    pub async fn new(base_dir: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.base_dir.join(key.file_name())
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get(&self, key: &StorageKey) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &StorageKey, value: &str) -> Result<()> {
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &StorageKey) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
