//! Per-session message transcripts
//!
//! Transcripts are bounded: only the newest `session_message_limit` messages
//! survive a save. The dropped early history of very long conversations is
//! compensated by the cross-session memory digest, which draws on every
//! other session, not on one session's trimmed window.

use crate::config::RetentionConfig;
use crate::error::Result;
use crate::storage::{self, KvStore, StorageKey};
use crate::types::Message;
use std::sync::Arc;

/// Store for per-(user, session) message lists
#[derive(Clone)]
pub struct TranscriptStore {
    store: Arc<dyn KvStore>,
    config: RetentionConfig,
}

impl TranscriptStore {
    /// Create a transcript store over the given backend
    pub fn new(store: Arc<dyn KvStore>, config: RetentionConfig) -> Self {
        Self { store, config }
    }

    /// The transcript in chronological order; empty when none exists
    pub async fn get(&self, user_id: &str, session_id: &str) -> Result<Vec<Message>> {
        storage::read_json(self.store.as_ref(), &StorageKey::transcript(user_id, session_id)).await
    }

    /// Persist the full desired transcript, keeping only the newest
    /// `session_message_limit` entries (oldest dropped first).
    pub async fn save(
        &self,
        user_id: &str,
        session_id: &str,
        mut messages: Vec<Message>,
    ) -> Result<()> {
        let limit = self.config.session_message_limit;
        if messages.len() > limit {
            let dropped = messages.len() - limit;
            messages.drain(..dropped);
            tracing::debug!("Trimmed {dropped} old messages from session {session_id}");
        }
        storage::write_json(
            self.store.as_ref(),
            &StorageKey::transcript(user_id, session_id),
            &messages,
        )
        .await
    }
}
