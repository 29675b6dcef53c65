//! Persistent storage — keys, backends, and JSON helpers
//!
//! Stored values are JSON. A value that fails to parse is treated the same
//! as an absent value (logged and replaced by the empty default) so a single
//! corrupt entry never takes the whole application down.

pub mod backend;
pub mod file;
pub mod key;

pub use backend::{KvStore, MemoryKvStore};
pub use file::FileKvStore;
pub use key::StorageKey;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and decode the JSON value under `key`, falling back to `T::default()`
/// when the key is absent or its value does not parse.
pub(crate) async fn read_json<T>(store: &dyn KvStore, key: &StorageKey) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Discarding corrupt value under {key}: {e}");
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}

/// Read and decode the JSON value under `key`; `None` when absent or corrupt.
pub(crate) async fn read_json_opt<T>(store: &dyn KvStore, key: &StorageKey) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Discarding corrupt value under {key}: {e}");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
pub(crate) async fn write_json<T>(store: &dyn KvStore, key: &StorageKey, value: &T) -> Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_json_absent_yields_default() {
        let store = MemoryKvStore::new();
        let values: Vec<i64> = read_json(&store, &StorageKey::goals("user-1")).await.unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn test_read_json_corrupt_yields_default() {
        let store = MemoryKvStore::new();
        let key = StorageKey::goals("user-1");
        store.set(&key, "{not valid json").await.unwrap();

        let values: Vec<i64> = read_json(&store, &key).await.unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let store = MemoryKvStore::new();
        let key = StorageKey::moods("user-1");

        write_json(&store, &key, &vec![3i64, 1, 2]).await.unwrap();
        let values: Vec<i64> = read_json(&store, &key).await.unwrap();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_read_json_opt_corrupt_is_none() {
        let store = MemoryKvStore::new();
        let key = StorageKey::profile("user-1");
        store.set(&key, "????").await.unwrap();

        let profile: Option<serde_json::Value> = read_json_opt(&store, &key).await.unwrap();
        assert!(profile.is_none());
    }
}
