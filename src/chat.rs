//! Conversation turn orchestration
//!
//! `ChatService` wires the stores, the memory aggregator, the insight
//! engine, and the injected assistant collaborator into the per-turn flow:
//! extend the transcript, refresh the session preview, build the context
//! bundle, hand it to the assistant, and append the reply.

use crate::assistant::{AssistantRequest, CompanionAssistant};
use crate::config::RetentionConfig;
use crate::error::{Error, Result};
use crate::goals::GoalStore;
use crate::memory::{InsightEngine, MemoryAggregator};
use crate::moods::MoodStore;
use crate::profile::ProfileStore;
use crate::session::{SessionStore, TranscriptStore};
use crate::storage::KvStore;
use crate::types::{ChatSession, Message, Mood, MoodEntry};
use std::sync::Arc;

/// Orchestrates chat turns for the host application.
///
/// All operations take the user and session ids explicitly; the service
/// holds no notion of a current user or active session.
pub struct ChatService {
    profiles: ProfileStore,
    sessions: SessionStore,
    transcripts: TranscriptStore,
    goals: GoalStore,
    moods: MoodStore,
    aggregator: MemoryAggregator,
    assistant: Arc<dyn CompanionAssistant>,
}

impl ChatService {
    /// Build a service over one storage backend and one assistant
    pub fn new(
        store: Arc<dyn KvStore>,
        config: RetentionConfig,
        assistant: Arc<dyn CompanionAssistant>,
    ) -> Self {
        let sessions = SessionStore::new(store.clone(), config.clone());
        let transcripts = TranscriptStore::new(store.clone(), config.clone());
        let aggregator = MemoryAggregator::new(sessions.clone(), transcripts.clone(), config);
        Self {
            profiles: ProfileStore::new(store.clone()),
            sessions,
            transcripts,
            goals: GoalStore::new(store.clone()),
            moods: MoodStore::new(store),
            aggregator,
            assistant,
        }
    }

    /// Session metadata store, for listing and deleting sessions
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Transcript store, for loading a session's messages
    pub fn transcripts(&self) -> &TranscriptStore {
        &self.transcripts
    }

    /// Goal store, for the host's goal board
    pub fn goals(&self) -> &GoalStore {
        &self.goals
    }

    /// Mood store, for the host's mood tracker
    pub fn moods(&self) -> &MoodStore {
        &self.moods
    }

    /// The user's most recent session, creating one when none exist (the
    /// first-login case).
    pub async fn open_session(&self, user_id: &str) -> Result<ChatSession> {
        let sessions = self.sessions.list(user_id).await?;
        match sessions.into_iter().next() {
            Some(session) => Ok(session),
            None => self.sessions.create(user_id).await,
        }
    }

    /// Run one user turn against the active session.
    ///
    /// Appends the user message (trimming the transcript window), refreshes
    /// the session preview, builds the context bundle (other-session digest,
    /// goals, moods, proactive observations), calls the assistant, appends
    /// its reply, and applies any goal the assistant asked to add. Returns
    /// the appended assistant message.
    pub async fn send_message(
        &self,
        user_id: &str,
        session_id: &str,
        text: &str,
        language: &str,
    ) -> Result<Message> {
        let profile = self
            .profiles
            .get(user_id)
            .await?
            .ok_or_else(|| Error::Internal(format!("no profile stored for '{user_id}'")))?;

        let prior = self.transcripts.get(user_id, session_id).await?;
        let user_msg = Message::user(text);

        let mut history = prior.clone();
        history.push(user_msg.clone());
        self.transcripts.save(user_id, session_id, history).await?;
        self.sessions.touch(user_id, session_id, text).await?;

        let memory_digest = self.aggregator.digest(user_id, session_id).await?;
        let goals = self.goals.list(user_id).await?;
        let moods = self.moods.list(user_id).await?;
        let observations = InsightEngine::observe(&goals, &moods);

        let reply = self
            .assistant
            .respond(AssistantRequest {
                history: &prior,
                new_message: text,
                profile: &profile,
                goals: &goals,
                moods: &moods,
                memory_digest: &memory_digest,
                observations: &observations,
                language,
            })
            .await?;

        let mut reply_msg = Message::assistant(reply.text, reply.image, reply.detected_mood);
        if reply_msg.id == user_msg.id {
            // Same-millisecond reply; keep ids unique within the session
            reply_msg.id = (reply_msg.timestamp + 1).to_string();
        }

        let mut history = self.transcripts.get(user_id, session_id).await?;
        history.push(reply_msg.clone());
        self.transcripts.save(user_id, session_id, history).await?;

        if let Some(goal_text) = reply.goal_to_add.as_deref() {
            self.goals.add(user_id, goal_text).await?;
            tracing::debug!("Assistant added goal for {user_id}");
        }

        Ok(reply_msg)
    }

    /// Record a mood check-in for the user
    pub async fn record_mood(
        &self,
        user_id: &str,
        mood: Mood,
        note: Option<String>,
    ) -> Result<MoodEntry> {
        self.moods.record(user_id, mood, note).await
    }
}
