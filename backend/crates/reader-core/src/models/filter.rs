//! Filter entity - a named, positioned saved search owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_FILTER_CATEGORY: &str = "Search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Search query string, e.g. `in:inbox`
    pub filter: String,
    pub category: String,
    pub position: i64,
    pub default_filter: bool,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Filter {
    /// Build one of the filters provisioned for every new user.
    pub fn default_for_user(
        user_id: Uuid,
        name: &str,
        filter: &str,
        position: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            description: None,
            filter: filter.to_string(),
            category: DEFAULT_FILTER_CATEGORY.to_string(),
            position,
            default_filter: true,
            visible: true,
            created_at: now,
            updated_at: now,
        }
    }
}
