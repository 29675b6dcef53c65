//! Per-user session metadata
//!
//! Each user owns an ordered list of conversation sessions. The whole list
//! is re-persisted on every mutation, keeping the sort-by-recency invariant
//! in one place; partial updates are never written.

use crate::config::RetentionConfig;
use crate::error::Result;
use crate::storage::{self, KvStore, StorageKey};
use crate::types::{now_millis, ChatSession};
use std::sync::Arc;

/// Title given to a session at creation
const DEFAULT_TITLE: &str = "New Conversation";
/// Preview shown before the first message arrives
const DEFAULT_PREVIEW: &str = "Start chatting...";

/// Store for per-user conversation-session metadata
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KvStore>,
    config: RetentionConfig,
}

impl SessionStore {
    /// Create a session store over the given backend
    pub fn new(store: Arc<dyn KvStore>, config: RetentionConfig) -> Self {
        Self { store, config }
    }

    /// All sessions for `user_id`, sorted by last-updated descending
    pub async fn list(&self, user_id: &str) -> Result<Vec<ChatSession>> {
        storage::read_json(self.store.as_ref(), &StorageKey::sessions(user_id)).await
    }

    /// Create a new session at the head of the user's list.
    ///
    /// Ids are millis timestamps, bumped past the largest existing id when
    /// two creations land in the same millisecond, so ids stay strictly
    /// increasing per user.
    pub async fn create(&self, user_id: &str) -> Result<ChatSession> {
        let mut sessions = self.list(user_id).await?;

        let now = now_millis();
        let max_existing = sessions
            .iter()
            .filter_map(|s| s.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        let id = now.max(max_existing + 1);

        let session = ChatSession {
            id: id.to_string(),
            title: DEFAULT_TITLE.to_string(),
            preview: DEFAULT_PREVIEW.to_string(),
            updated_at: now,
        };

        sessions.insert(0, session.clone());
        self.persist(user_id, sessions).await?;

        tracing::debug!("Created session {} for {user_id}", session.id);
        Ok(session)
    }

    /// Refresh a session's preview and timestamp after a new message.
    ///
    /// The preview is the first `preview_length` characters of
    /// `last_message_text`, with an ellipsis marker when truncated. Unknown
    /// session ids are a silent no-op.
    pub async fn touch(&self, user_id: &str, session_id: &str, last_message_text: &str) -> Result<()> {
        let mut sessions = self.list(user_id).await?;

        let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) else {
            return Ok(());
        };
        session.preview = make_preview(last_message_text, self.config.preview_length);
        session.updated_at = now_millis();

        self.persist(user_id, sessions).await
    }

    /// Remove a session and its transcript. Idempotent: deleting an unknown
    /// id leaves the list unchanged.
    pub async fn delete(&self, user_id: &str, session_id: &str) -> Result<()> {
        let mut sessions = self.list(user_id).await?;
        sessions.retain(|s| s.id != session_id);
        self.persist(user_id, sessions).await?;

        // Cascade: the transcript goes with the session
        self.store
            .remove(&StorageKey::transcript(user_id, session_id))
            .await
    }

    /// Re-sort descending by last-updated and write the full list back.
    async fn persist(&self, user_id: &str, mut sessions: Vec<ChatSession>) -> Result<()> {
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        storage::write_json(self.store.as_ref(), &StorageKey::sessions(user_id), &sessions).await
    }
}

/// Truncate `text` to `limit` characters, marking the cut with an ellipsis.
fn make_preview(text: &str, limit: usize) -> String {
    let mut preview: String = text.chars().take(limit).collect();
    if text.chars().count() > limit {
        preview.push_str("...");
    }
    preview
}
