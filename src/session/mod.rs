//! Session metadata and transcript persistence

pub mod store;
pub mod transcript;

pub use store::SessionStore;
pub use transcript::TranscriptStore;
