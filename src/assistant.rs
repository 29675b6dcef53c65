//! Generative-assistant collaborator boundary
//!
//! The core never performs model inference. It assembles a context bundle —
//! transcript, profile, goals, moods, the cross-session digest, and proactive
//! observations — and hands it to an implementation of this trait. What the
//! implementation does with it (prompting, tool dispatch, image generation)
//! is opaque to the core.

use crate::error::Result;
use crate::memory::Observation;
use crate::types::{Goal, Message, MoodEntry, Profile};
use async_trait::async_trait;

/// Context bundle for one user turn
#[derive(Debug)]
pub struct AssistantRequest<'a> {
    /// The active session's transcript, excluding the new message
    pub history: &'a [Message],
    /// The user's new utterance
    pub new_message: &'a str,
    pub profile: &'a Profile,
    pub goals: &'a [Goal],
    /// Mood history, newest first
    pub moods: &'a [MoodEntry],
    /// Cross-session memory digest; empty when there are no other sessions
    pub memory_digest: &'a str,
    /// Proactive observations derived from goals and moods
    pub observations: &'a [Observation],
    /// BCP 47 language preference, e.g. `"en-US"`
    pub language: &'a str,
}

/// The assistant's reply for one turn
#[derive(Debug, Clone, Default)]
pub struct AssistantReply {
    /// Response text
    pub text: String,
    /// Opaque encoded image payload, when one was generated
    pub image: Option<String>,
    /// Mood label detected in the user's input
    pub detected_mood: Option<String>,
    /// Goal text the assistant asked to add to the user's list
    pub goal_to_add: Option<String>,
}

/// Generative conversational assistant consumed by the core
#[async_trait]
pub trait CompanionAssistant: Send + Sync {
    /// Produce a reply for one user turn
    async fn respond(&self, request: AssistantRequest<'_>) -> Result<AssistantReply>;
}
