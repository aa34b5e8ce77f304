use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Links a user to a group through the invite that granted access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub group_id: Uuid,
    pub invite_id: Uuid,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl GroupMembership {
    pub fn new(user_id: Uuid, group_id: Uuid, invite_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            group_id,
            invite_id,
            is_admin: false,
            created_at: now,
        }
    }
}
