//! Per-user mood check-in history
//!
//! Append-only and unbounded; new entries are prepended so the stored list
//! is always newest-first, which is the order the insight engine expects.

use crate::error::Result;
use crate::storage::{self, KvStore, StorageKey};
use crate::types::{Mood, MoodEntry};
use std::sync::Arc;

/// Store for per-user mood histories
#[derive(Clone)]
pub struct MoodStore {
    store: Arc<dyn KvStore>,
}

impl MoodStore {
    /// Create a mood store over the given backend
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Full mood history for `user_id`, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        storage::read_json(self.store.as_ref(), &StorageKey::moods(user_id)).await
    }

    /// Record a new check-in at the head of the history
    pub async fn record(&self, user_id: &str, mood: Mood, note: Option<String>) -> Result<MoodEntry> {
        let entry = MoodEntry::new(mood, note);
        let mut history = self.list(user_id).await?;
        history.insert(0, entry.clone());
        storage::write_json(self.store.as_ref(), &StorageKey::moods(user_id), &history).await?;
        Ok(entry)
    }
}
