//! Retention and context-window configuration

use serde::{Deserialize, Serialize};

/// Retention limits for transcripts and the cross-session memory digest.
///
/// The defaults match the limits the rest of the system is tuned for: a
/// 100-message window per session, a 30-message digest across all other
/// sessions, and 50-character session previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Maximum messages kept per session transcript (oldest dropped first)
    pub session_message_limit: usize,

    /// Maximum messages in the cross-session memory digest
    pub global_memory_limit: usize,

    /// Maximum characters in a session preview snippet
    pub preview_length: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            session_message_limit: 100,
            global_memory_limit: 30,
            preview_length: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = RetentionConfig::default();
        assert_eq!(config.session_message_limit, 100);
        assert_eq!(config.global_memory_limit, 30);
        assert_eq!(config.preview_length, 50);
    }

    #[test]
    fn test_config_round_trip() {
        let config = RetentionConfig {
            session_message_limit: 10,
            global_memory_limit: 5,
            preview_length: 20,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RetentionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.session_message_limit, 10);
        assert_eq!(parsed.global_memory_limit, 5);
        assert_eq!(parsed.preview_length, 20);
    }
}
