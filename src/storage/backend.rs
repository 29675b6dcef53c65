//! Key-value storage collaborator
//!
//! The core persists everything through a durable string-keyed store. The
//! trait is the seam the host application implements (browser storage, a
//! file tree, a test double); `MemoryKvStore` is the in-process default used
//! by tests.

use super::key::StorageKey;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Durable string-keyed store. Implementations must complete each write
/// before returning; callers rely on every mutation being durable when the
/// call resolves.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &StorageKey) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &StorageKey, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is not an
    /// error.
    async fn remove(&self, key: &StorageKey) -> Result<()>;
}

/// In-memory store backed by a `HashMap`
pub struct MemoryKvStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKvStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &StorageKey) -> Result<Option<String>> {
        Ok(self.values.read().await.get(&key.render()).cloned())
    }

    async fn set(&self, key: &StorageKey, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.render(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &StorageKey) -> Result<()> {
        self.values.write().await.remove(&key.render());
        Ok(())
    }
}
