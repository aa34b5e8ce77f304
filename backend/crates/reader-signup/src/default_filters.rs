//! Saved searches provisioned for every new user.
//!
//! Clients rely on these names, queries and positions, so the list must not
//! be reordered or edited.

use reader_core::Filter;
use reader_db::{FilterRepository, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// (name, query) pairs; position is the index.
pub const DEFAULT_FILTERS: [(&str, &str); 8] = [
    ("Inbox", "in:inbox"),
    ("Continue Reading", "in:inbox sort:read-desc is:unread"),
    ("Non-Feed Items", "in:library"),
    ("Highlights", "has:highlights mode:highlights"),
    ("Unlabeled", "no:label"),
    ("Oldest First", "sort:saved-asc"),
    ("Files", "type:file"),
    ("Archived", "in:archive"),
];

pub fn build_default_filters(user_id: Uuid, now: DateTime<Utc>) -> Vec<Filter> {
    DEFAULT_FILTERS
        .iter()
        .zip(0_i64..)
        .map(|(&(name, query), position)| {
            Filter::default_for_user(user_id, name, query, position, now)
        })
        .collect()
}

/// Insert the default filter set for a freshly created user.
pub async fn create_default_filters(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> DbErrorResult<Vec<Filter>> {
    let filters = build_default_filters(user_id, now);

    for filter in &filters {
        FilterRepository::create(&mut **tx, filter).await?;
    }

    Ok(filters)
}
