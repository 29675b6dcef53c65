//! Per-user profile records

use crate::error::Result;
use crate::storage::{self, KvStore, StorageKey};
use crate::types::Profile;
use std::sync::Arc;

/// Store for per-user profile records, keyed by profile id
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KvStore>,
}

impl ProfileStore {
    /// Create a profile store over the given backend
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Fetch a profile by id; `None` when absent or unreadable
    pub async fn get(&self, user_id: &str) -> Result<Option<Profile>> {
        storage::read_json_opt(self.store.as_ref(), &StorageKey::profile(user_id)).await
    }

    /// Persist a profile under its id
    pub async fn put(&self, profile: &Profile) -> Result<()> {
        storage::write_json(self.store.as_ref(), &StorageKey::profile(&profile.id), profile).await
    }
}
