use crate::conversions::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use reader_core::Filter;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct FilterRow {
    id: String,
    user_id: String,
    name: String,
    description: Option<String>,
    filter: String,
    category: String,
    position: i64,
    default_filter: bool,
    visible: bool,
    created_at: i64,
    updated_at: i64,
}

impl FilterRow {
    fn into_filter(self) -> DbErrorResult<Filter> {
        Ok(Filter {
            id: parse_uuid(&self.id, "filters.id")?,
            user_id: parse_uuid(&self.user_id, "filters.user_id")?,
            name: self.name,
            description: self.description,
            filter: self.filter,
            category: self.category,
            position: self.position,
            default_filter: self.default_filter,
            visible: self.visible,
            created_at: parse_timestamp(self.created_at, "filters.created_at")?,
            updated_at: parse_timestamp(self.updated_at, "filters.updated_at")?,
        })
    }
}

pub struct FilterRepository;

impl FilterRepository {
    pub async fn create<'e, E>(executor: E, filter: &Filter) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO filters (
                  id, user_id, name, description, filter, category,
                  position, default_filter, visible, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(filter.id.to_string())
        .bind(filter.user_id.to_string())
        .bind(&filter.name)
        .bind(filter.description.as_deref())
        .bind(&filter.filter)
        .bind(&filter.category)
        .bind(filter.position)
        .bind(filter.default_filter)
        .bind(filter.visible)
        .bind(filter.created_at.timestamp())
        .bind(filter.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// All filters of a user, ordered by position.
    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Filter>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, FilterRow>(
            r#"
              SELECT id, user_id, name, description, filter, category,
                     position, default_filter, visible, created_at, updated_at
              FROM filters
              WHERE user_id = ?
              ORDER BY position ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(FilterRow::into_filter)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
