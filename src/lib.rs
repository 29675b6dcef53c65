//! Lumi core - conversation memory and session persistence
//!
//! Lumi is a personal-companion chat application. This crate is its core:
//! the storage and aggregation layer that manages user profiles, daily
//! goals, mood check-ins, and multi-session chat transcripts, and that
//! builds the bounded long-term context handed to the generative assistant.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        ChatService                         │
//! │  per-turn orchestration: transcript → preview → context    │
//! │  bundle → assistant → reply                                │
//! └───────┬───────────────┬───────────────┬────────────────────┘
//!         │               │               │
//! ┌───────▼──────┐ ┌──────▼───────┐ ┌─────▼──────────────────┐
//! │ SessionStore │ │ Transcript   │ │ MemoryAggregator       │
//! │ (metadata,   │ │ Store        │ │ (≤30-message digest of │
//! │  recency-    │ │ (100-message │ │  all *other* sessions) │
//! │  sorted)     │ │  window)     │ │                        │
//! └───────┬──────┘ └──────┬───────┘ └─────┬──────────────────┘
//!         │               │               │
//! ┌───────▼───────────────▼───────────────▼────────────────────┐
//! │            KvStore (durable string-keyed storage)          │
//! │        MemoryKvStore (tests) / FileKvStore (device)        │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ProfileDirectory` handles registration/login and the last-used-user
//! record; `GoalStore` and `MoodStore` back the goal board and mood tracker;
//! `InsightEngine` derives proactive observations from them. The generative
//! call itself lives behind the [`assistant::CompanionAssistant`] trait and
//! is supplied by the host application.
//!
//! All per-user collections are isolated by user id; nothing is shared
//! across users. A single active client is assumed: every mutation is a
//! whole-value read-modify-write with last-writer-wins semantics.
//!
//! ## Modules
//!
//! - [`storage`]: composite keys, the `KvStore` trait, and its backends
//! - [`directory`]: global account directory (register, login, last user)
//! - [`profile`]: per-user profile records
//! - [`session`]: session metadata and bounded transcripts
//! - [`memory`]: cross-session digest and the insight engine
//! - [`goals`], [`moods`]: goal board and mood tracker collections
//! - [`assistant`]: the generative collaborator boundary
//! - [`chat`]: per-turn orchestration

pub mod assistant;
pub mod chat;
pub mod config;
pub mod directory;
pub mod error;
pub mod goals;
pub mod memory;
pub mod moods;
pub mod profile;
pub mod session;
pub mod storage;
pub mod types;

pub use assistant::{AssistantReply, AssistantRequest, CompanionAssistant};
pub use chat::ChatService;
pub use config::RetentionConfig;
pub use directory::{NewProfile, ProfileDirectory};
pub use error::{Error, Result};
pub use goals::GoalStore;
pub use memory::{InsightEngine, MemoryAggregator, Observation};
pub use moods::MoodStore;
pub use profile::ProfileStore;
pub use session::{SessionStore, TranscriptStore};
pub use storage::{FileKvStore, KvStore, MemoryKvStore, StorageKey};
pub use types::{ChatSession, Goal, Message, Mood, MoodEntry, Profile, Sender};
