//! Core data types
//!
//! Field names and enum values keep the wire format of the data already
//! persisted on user devices (camelCase fields, `"user"`/`"model"` sender
//! tags), so existing stored collections remain readable.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current wall-clock time in milliseconds since the epoch.
///
/// All entity timestamps and time-derived ids use this resolution.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A registered user's profile. Created at registration, never mutated or
/// deleted by this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique, stable identifier (slugified name + uniqueness suffix)
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email, unique across the directory
    pub email: String,
    /// Login secret; compared verbatim, not a security boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Free-text life goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub onboarding_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Metadata for one conversation thread owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Time-derived id, strictly increasing per user
    pub id: String,
    pub title: String,
    /// Truncated snippet of the most recent message
    pub preview: String,
    /// Last-updated timestamp (millis); the session list is kept sorted by
    /// this field, descending
    pub updated_at: i64,
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    /// The assistant; serialized as `"model"` on the wire
    #[serde(rename = "model")]
    Assistant,
}

/// One message in a session transcript. Messages are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Time-derived id, unique within its session
    pub id: String,
    pub text: String,
    /// Opaque encoded image payload, when the message carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Mood label the assistant detected in the user's input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_mood: Option<String>,
    pub sender: Sender,
    pub timestamp: i64,
}

impl Message {
    /// Build a user message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: now.to_string(),
            text: text.into(),
            image: None,
            detected_mood: None,
            sender: Sender::User,
            timestamp: now,
        }
    }

    /// Build an assistant message stamped with the current time.
    pub fn assistant(
        text: impl Into<String>,
        image: Option<String>,
        detected_mood: Option<String>,
    ) -> Self {
        let now = now_millis();
        Self {
            id: now.to_string(),
            text: text.into(),
            image,
            detected_mood,
            sender: Sender::Assistant,
            timestamp: now,
        }
    }
}

/// Fixed mood severity scale. Ordering is by severity: `Terrible` is the
/// lowest, `Great` the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Terrible,
    Bad,
    Okay,
    Good,
    Great,
}

impl Mood {
    /// Whether this mood belongs to the negative subset used by the
    /// mood-decline insight.
    pub fn is_negative(&self) -> bool {
        matches!(self, Mood::Bad | Mood::Terrible)
    }
}

/// One recorded mood check-in. Append-only, kept newest-first, unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: i64,
}

impl MoodEntry {
    /// Build a mood entry stamped with the current time.
    pub fn new(mood: Mood, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mood,
            note,
            timestamp: now_millis(),
        }
    }
}

/// One daily goal. Completion is toggleable; goals are deletable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
}

impl Goal {
    /// Build an incomplete goal stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: now.to_string(),
            text: text.into(),
            completed: false,
            created_at: now,
        }
    }
}
