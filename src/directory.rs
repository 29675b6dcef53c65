//! Global profile directory
//!
//! Maps login credentials to profile ids across all users, so login works
//! without knowing an id in advance. Matching is exact and case-sensitive;
//! this is a convenience lookup, not a security boundary. The directory also
//! owns the global last-used-user record that restores the previous session
//! across application restarts.

use crate::error::{Error, Result};
use crate::profile::ProfileStore;
use crate::storage::{self, KvStore, StorageKey};
use crate::types::{now_millis, Profile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One directory entry: the credential pair plus the minted profile id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub name: String,
}

/// Candidate fields for a new registration
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub bio: Option<String>,
}

/// Global registry of accounts, backed by a single directory key
#[derive(Clone)]
pub struct ProfileDirectory {
    store: Arc<dyn KvStore>,
    profiles: ProfileStore,
}

impl ProfileDirectory {
    /// Create a directory over the given backend
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        let profiles = ProfileStore::new(store.clone());
        Self { store, profiles }
    }

    /// All directory entries; empty when none registered
    pub async fn entries(&self) -> Result<Vec<DirectoryEntry>> {
        storage::read_json(self.store.as_ref(), &StorageKey::directory()).await
    }

    /// Register a new account.
    ///
    /// Mints an id from the slugified display name plus a short time-derived
    /// suffix, fails with [`Error::DuplicateAccount`] when the email is
    /// already present, persists the directory entry and the full profile,
    /// and records the new account as the last-used user.
    pub async fn register(&self, candidate: NewProfile) -> Result<Profile> {
        let mut entries = self.entries().await?;

        if entries.iter().any(|e| e.email == candidate.email) {
            return Err(Error::DuplicateAccount);
        }

        let id = mint_id(&candidate.name);
        let profile = Profile {
            id: id.clone(),
            name: if candidate.name.is_empty() {
                "User".to_string()
            } else {
                candidate.name
            },
            email: candidate.email,
            password: candidate.password,
            age: candidate.age,
            occupation: candidate.occupation,
            bio: candidate.bio,
            onboarding_complete: true,
            avatar: None,
        };

        entries.push(DirectoryEntry {
            id: id.clone(),
            email: profile.email.clone(),
            password: profile.password.clone(),
            name: profile.name.clone(),
        });
        storage::write_json(self.store.as_ref(), &StorageKey::directory(), &entries).await?;
        self.profiles.put(&profile).await?;
        self.set_last_user(&id).await?;

        tracing::debug!("Registered account {id}");
        Ok(profile)
    }

    /// Look up an account by exact email + password match.
    ///
    /// Returns the stored profile on success, `None` on any mismatch. A
    /// successful login records the account as the last-used user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Profile>> {
        let entries = self.entries().await?;
        let entry = entries
            .iter()
            .find(|e| e.email == email && e.password.as_deref() == Some(password));

        match entry {
            Some(entry) => {
                let profile = self.profiles.get(&entry.id).await?;
                if profile.is_some() {
                    self.set_last_user(&entry.id).await?;
                }
                Ok(profile)
            }
            None => Ok(None),
        }
    }

    /// Id of the most recently registered or logged-in user, if any
    pub async fn last_user_id(&self) -> Result<Option<String>> {
        self.store.get(&StorageKey::last_user()).await
    }

    /// Record `user_id` as the last-used user
    pub async fn set_last_user(&self, user_id: &str) -> Result<()> {
        self.store.set(&StorageKey::last_user(), user_id).await
    }

    /// Clear the last-used-user record (logout)
    pub async fn clear_last_user(&self) -> Result<()> {
        self.store.remove(&StorageKey::last_user()).await
    }
}

/// Slugify a display name and append the last four digits of the current
/// millis timestamp as a uniqueness suffix.
fn mint_id(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    let slug = if slug.is_empty() { "user".to_string() } else { slug };

    let millis = now_millis().to_string();
    let suffix = &millis[millis.len().saturating_sub(4)..];
    format!("{slug}-{suffix}")
}
