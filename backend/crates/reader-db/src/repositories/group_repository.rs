use crate::conversions::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use reader_core::Group;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub(crate) struct GroupRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) created_by: String,
    pub(crate) created_at: i64,
}

impl GroupRow {
    pub(crate) fn into_group(self) -> DbErrorResult<Group> {
        Ok(Group {
            id: parse_uuid(&self.id, "user_groups.id")?,
            name: self.name,
            created_by: parse_uuid(&self.created_by, "user_groups.created_by")?,
            created_at: parse_timestamp(self.created_at, "user_groups.created_at")?,
        })
    }
}

pub struct GroupRepository;

impl GroupRepository {
    pub async fn create<'e, E>(executor: E, group: &Group) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO user_groups (id, name, created_by, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(group.id.to_string())
        .bind(&group.name)
        .bind(group.created_by.to_string())
        .bind(group.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Group>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, GroupRow>(
            "SELECT id, name, created_by, created_at FROM user_groups WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(GroupRow::into_group).transpose()
    }
}
