//! Invite entity - a redeemable code granting membership in a group.

use crate::Group;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub id: Uuid,
    pub code: String,
    pub group_id: Uuid,
    pub created_by: Uuid,
    /// Invite is usable while this lies strictly in the future
    pub expiration_time: DateTime<Utc>,
    /// Memberships allowed through this invite
    pub max_members: i64,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    pub fn new(
        code: String,
        group_id: Uuid,
        created_by: Uuid,
        expiration_time: DateTime<Utc>,
        max_members: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            group_id,
            created_by,
            expiration_time,
            max_members,
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration_time <= now
    }

    pub fn has_capacity(&self, member_count: i64) -> bool {
        member_count < self.max_members
    }
}

/// Invite loaded together with the group it grants access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteWithGroup {
    pub invite: Invite,
    pub group: Group,
}
