//! Structured storage keys
//!
//! Every persisted value lives under a composite key: a fixed namespace,
//! a scope (global or one user), and an entity kind with an optional entity
//! id. Keys render to the flat string form the storage collaborator expects,
//! so the logical keyspace stays stable even if the backend changes.

use std::fmt;

/// Fixed namespace prefix for every key owned by this crate.
const NAMESPACE: &str = "lumi";

/// Composite key identifying one stored value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    scope: Scope,
    entity: Entity,
}

/// Whether a key is global or belongs to one user's data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Scope {
    Global,
    User(String),
}

/// The kind of entity stored under a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Entity {
    /// Global registry of (id, email, password, name) entries
    Directory,
    /// Global last-used user id, for restoring the previous session
    LastUser,
    Profile,
    Goals,
    Moods,
    /// Per-user session metadata list
    Sessions,
    /// Per-session message list, parameterized by session id
    Transcript(String),
}

impl StorageKey {
    /// Global user directory key
    pub fn directory() -> Self {
        Self {
            scope: Scope::Global,
            entity: Entity::Directory,
        }
    }

    /// Global last-used user id key
    pub fn last_user() -> Self {
        Self {
            scope: Scope::Global,
            entity: Entity::LastUser,
        }
    }

    /// Profile record for one user
    pub fn profile(user_id: &str) -> Self {
        Self {
            scope: Scope::User(user_id.to_string()),
            entity: Entity::Profile,
        }
    }

    /// Goal list for one user
    pub fn goals(user_id: &str) -> Self {
        Self {
            scope: Scope::User(user_id.to_string()),
            entity: Entity::Goals,
        }
    }

    /// Mood history for one user
    pub fn moods(user_id: &str) -> Self {
        Self {
            scope: Scope::User(user_id.to_string()),
            entity: Entity::Moods,
        }
    }

    /// Session metadata list for one user
    pub fn sessions(user_id: &str) -> Self {
        Self {
            scope: Scope::User(user_id.to_string()),
            entity: Entity::Sessions,
        }
    }

    /// Message list for one (user, session) pair
    pub fn transcript(user_id: &str, session_id: &str) -> Self {
        Self {
            scope: Scope::User(user_id.to_string()),
            entity: Entity::Transcript(session_id.to_string()),
        }
    }

    /// Render to the flat string form used by the storage collaborator.
    pub fn render(&self) -> String {
        match (&self.scope, &self.entity) {
            (Scope::Global, Entity::Directory) => format!("{NAMESPACE}_users_directory"),
            (Scope::Global, Entity::LastUser) => format!("{NAMESPACE}_last_user_id"),
            (Scope::Global, entity) => {
                // Unreachable via the constructors; keep globals unambiguous
                format!("{NAMESPACE}_global_{entity:?}")
            }
            (Scope::User(user), Entity::Profile) => format!("{NAMESPACE}_{user}_profile"),
            (Scope::User(user), Entity::Goals) => format!("{NAMESPACE}_{user}_goals"),
            (Scope::User(user), Entity::Moods) => format!("{NAMESPACE}_{user}_moods"),
            (Scope::User(user), Entity::Sessions) => format!("{NAMESPACE}_{user}_sessions"),
            (Scope::User(user), Entity::Transcript(session)) => {
                format!("{NAMESPACE}_{user}_msg_{session}")
            }
            (Scope::User(user), entity) => format!("{NAMESPACE}_{user}_{entity:?}"),
        }
    }

    /// Rendered key reduced to a safe file name (for file-backed stores).
    pub fn file_name(&self) -> String {
        let sanitized: String = self
            .render()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        format!("{sanitized}.json")
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
