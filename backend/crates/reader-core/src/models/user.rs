//! User entity - identity record created once per signup.

use crate::{AuthProvider, Profile, UserStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub provider: AuthProvider,
    /// Unique, compared case-insensitively
    pub email: String,
    pub name: String,
    /// Already hashed by the caller; never serialized
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        provider: AuthProvider,
        email: String,
        name: String,
        password: Option<String>,
        status: UserStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider,
            email,
            name,
            password,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == UserStatus::Pending
    }
}

/// Key used for email uniqueness and lookups: trimmed and lowercased with
/// full Unicode case folding.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// User row loaded together with its (possibly missing) profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: Option<Profile>,
}
