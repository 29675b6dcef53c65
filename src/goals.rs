//! Per-user daily goals
//!
//! Goals are kept newest-first for display; the whole list is re-persisted
//! on every mutation.

use crate::error::Result;
use crate::storage::{self, KvStore, StorageKey};
use crate::types::Goal;
use std::sync::Arc;

/// Store for per-user goal lists
#[derive(Clone)]
pub struct GoalStore {
    store: Arc<dyn KvStore>,
}

impl GoalStore {
    /// Create a goal store over the given backend
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// All goals for `user_id`, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        storage::read_json(self.store.as_ref(), &StorageKey::goals(user_id)).await
    }

    /// Add a new incomplete goal at the head of the list
    pub async fn add(&self, user_id: &str, text: &str) -> Result<Goal> {
        let goal = Goal::new(text);
        let mut goals = self.list(user_id).await?;
        goals.insert(0, goal.clone());
        self.persist(user_id, &goals).await?;
        Ok(goal)
    }

    /// Flip the completion flag of the matching goal; unknown ids are a
    /// silent no-op
    pub async fn toggle(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let mut goals = self.list(user_id).await?;
        if let Some(goal) = goals.iter_mut().find(|g| g.id == goal_id) {
            goal.completed = !goal.completed;
        }
        self.persist(user_id, &goals).await
    }

    /// Remove the matching goal; idempotent
    pub async fn remove(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let mut goals = self.list(user_id).await?;
        goals.retain(|g| g.id != goal_id);
        self.persist(user_id, &goals).await
    }

    async fn persist(&self, user_id: &str, goals: &[Goal]) -> Result<()> {
        storage::write_json(self.store.as_ref(), &StorageKey::goals(user_id), &goals).await
    }
}
