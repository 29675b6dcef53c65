//! Cross-session memory digest
//!
//! Produces a compact, chronologically ordered text digest of what happened
//! in the user's *other* conversations, giving the assistant long-term
//! context without re-sending full history every turn. Selection is
//! recency-biased (the newest messages across all other sessions combined),
//! but the selected subset is re-sorted chronologically so the digest reads
//! as a timeline rather than a relevance-ranked list.

use crate::config::RetentionConfig;
use crate::error::Result;
use crate::session::{SessionStore, TranscriptStore};
use crate::types::{Message, Sender};

/// Marker appended to a digest line when the message carried an image
const ATTACHMENT_MARKER: &str = " [Generated an Image Attachment]";

/// Builds the bounded cross-session digest
#[derive(Clone)]
pub struct MemoryAggregator {
    sessions: SessionStore,
    transcripts: TranscriptStore,
    config: RetentionConfig,
}

impl MemoryAggregator {
    /// Create an aggregator over the session and transcript stores
    pub fn new(sessions: SessionStore, transcripts: TranscriptStore, config: RetentionConfig) -> Self {
        Self {
            sessions,
            transcripts,
            config,
        }
    }

    /// Digest of every session except `active_session_id`.
    ///
    /// At most `global_memory_limit` messages, one line per message, in
    /// non-decreasing timestamp order. Empty string when the user has no
    /// other sessions or they hold no messages.
    pub async fn digest(&self, user_id: &str, active_session_id: &str) -> Result<String> {
        let sessions = self.sessions.list(user_id).await?;

        let mut pool: Vec<Message> = Vec::new();
        for session in sessions.iter().filter(|s| s.id != active_session_id) {
            pool.extend(self.transcripts.get(user_id, &session.id).await?);
        }

        // Newest first, keep the most recent slice across all sessions
        pool.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        pool.truncate(self.config.global_memory_limit);

        // Back to chronological order for the downstream consumer
        pool.sort_by_key(|m| m.timestamp);

        let lines: Vec<String> = pool.iter().map(render_line).collect();
        Ok(lines.join("\n"))
    }
}

/// One digest line: role label, text, and an attachment marker if present.
fn render_line(message: &Message) -> String {
    let role = match message.sender {
        Sender::User => "User",
        Sender::Assistant => "Assistant",
    };
    let marker = if message.image.is_some() {
        ATTACHMENT_MARKER
    } else {
        ""
    };
    format!("[Past Chat] {role}: {}{marker}", message.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use std::sync::Arc;

    fn make_aggregator() -> (MemoryAggregator, SessionStore, TranscriptStore) {
        let kv: Arc<MemoryKvStore> = Arc::new(MemoryKvStore::new());
        let config = RetentionConfig::default();
        let sessions = SessionStore::new(kv.clone(), config.clone());
        let transcripts = TranscriptStore::new(kv, config.clone());
        let aggregator = MemoryAggregator::new(sessions.clone(), transcripts.clone(), config);
        (aggregator, sessions, transcripts)
    }

    fn message(sender: Sender, text: &str, timestamp: i64) -> Message {
        Message {
            id: timestamp.to_string(),
            text: text.to_string(),
            image: None,
            detected_mood: None,
            sender,
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_empty_when_no_other_sessions() {
        let (aggregator, sessions, _) = make_aggregator();
        let only = sessions.create("user-1").await.unwrap();

        let digest = aggregator.digest("user-1", &only.id).await.unwrap();
        assert!(digest.is_empty());
    }

    #[tokio::test]
    async fn test_excludes_active_session() {
        let (aggregator, sessions, transcripts) = make_aggregator();
        let s1 = sessions.create("user-1").await.unwrap();
        let s2 = sessions.create("user-1").await.unwrap();

        transcripts
            .save(
                "user-1",
                &s1.id,
                vec![
                    message(Sender::User, "past one", 1),
                    message(Sender::Assistant, "past two", 2),
                    message(Sender::User, "past three", 3),
                ],
            )
            .await
            .unwrap();
        transcripts
            .save(
                "user-1",
                &s2.id,
                vec![
                    message(Sender::User, "active one", 10),
                    message(Sender::Assistant, "active two", 11),
                ],
            )
            .await
            .unwrap();

        let digest = aggregator.digest("user-1", &s2.id).await.unwrap();

        assert!(digest.contains("past one"));
        assert!(digest.contains("past two"));
        assert!(digest.contains("past three"));
        assert!(!digest.contains("active one"));
        assert!(!digest.contains("active two"));

        // Chronological order
        let lines: Vec<&str> = digest.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[Past Chat] User: past one");
        assert_eq!(lines[1], "[Past Chat] Assistant: past two");
        assert_eq!(lines[2], "[Past Chat] User: past three");
    }

    #[tokio::test]
    async fn test_caps_at_thirty_newest() {
        let (aggregator, sessions, transcripts) = make_aggregator();
        let old = sessions.create("user-1").await.unwrap();
        let recent = sessions.create("user-1").await.unwrap();
        let active = sessions.create("user-1").await.unwrap();

        let old_messages: Vec<Message> =
            (0..40).map(|n| message(Sender::User, &format!("old {n}"), n)).collect();
        let recent_messages: Vec<Message> = (100..125)
            .map(|n| message(Sender::User, &format!("recent {n}"), n))
            .collect();

        transcripts.save("user-1", &old.id, old_messages).await.unwrap();
        transcripts.save("user-1", &recent.id, recent_messages).await.unwrap();

        let digest = aggregator.digest("user-1", &active.id).await.unwrap();
        let lines: Vec<&str> = digest.lines().collect();
        assert_eq!(lines.len(), 30);

        // The 25 recent messages plus the 5 newest of the old session
        assert_eq!(lines.first().unwrap(), &"[Past Chat] User: old 35");
        assert_eq!(lines.last().unwrap(), &"[Past Chat] User: recent 124");

        // Non-decreasing timestamp order end to end
        let mut count_recent = 0;
        for line in &lines {
            if line.contains("recent") {
                count_recent += 1;
            }
        }
        assert_eq!(count_recent, 25);
    }

    #[tokio::test]
    async fn test_attachment_marker() {
        let (aggregator, sessions, transcripts) = make_aggregator();
        let past = sessions.create("user-1").await.unwrap();
        let active = sessions.create("user-1").await.unwrap();

        let mut with_image = message(Sender::Assistant, "here is your drawing", 5);
        with_image.image = Some("data:image/png;base64,xyz".to_string());

        transcripts.save("user-1", &past.id, vec![with_image]).await.unwrap();

        let digest = aggregator.digest("user-1", &active.id).await.unwrap();
        assert_eq!(
            digest,
            "[Past Chat] Assistant: here is your drawing [Generated an Image Attachment]"
        );
    }

    #[tokio::test]
    async fn test_interleaves_sessions_chronologically() {
        let (aggregator, sessions, transcripts) = make_aggregator();
        let a = sessions.create("user-1").await.unwrap();
        let b = sessions.create("user-1").await.unwrap();
        let active = sessions.create("user-1").await.unwrap();

        transcripts
            .save(
                "user-1",
                &a.id,
                vec![message(Sender::User, "first", 1), message(Sender::User, "third", 3)],
            )
            .await
            .unwrap();
        transcripts
            .save(
                "user-1",
                &b.id,
                vec![message(Sender::User, "second", 2), message(Sender::User, "fourth", 4)],
            )
            .await
            .unwrap();

        let digest = aggregator.digest("user-1", &active.id).await.unwrap();
        let lines: Vec<&str> = digest.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[Past Chat] User: first",
                "[Past Chat] User: second",
                "[Past Chat] User: third",
                "[Past Chat] User: fourth",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_for_unknown_user() {
        let (aggregator, _, _) = make_aggregator();
        let digest = aggregator.digest("nobody", "s-1").await.unwrap();
        assert!(digest.is_empty());
    }
}
