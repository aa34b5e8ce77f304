use crate::conversions::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use reader_core::GroupMembership;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct GroupMembershipRow {
    id: String,
    user_id: String,
    group_id: String,
    invite_id: String,
    is_admin: bool,
    created_at: i64,
}

impl GroupMembershipRow {
    fn into_membership(self) -> DbErrorResult<GroupMembership> {
        Ok(GroupMembership {
            id: parse_uuid(&self.id, "group_memberships.id")?,
            user_id: parse_uuid(&self.user_id, "group_memberships.user_id")?,
            group_id: parse_uuid(&self.group_id, "group_memberships.group_id")?,
            invite_id: parse_uuid(&self.invite_id, "group_memberships.invite_id")?,
            is_admin: self.is_admin,
            created_at: parse_timestamp(self.created_at, "group_memberships.created_at")?,
        })
    }
}

pub struct GroupMembershipRepository;

impl GroupMembershipRepository {
    pub async fn create<'e, E>(executor: E, membership: &GroupMembership) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO group_memberships (
                  id, user_id, group_id, invite_id, is_admin, created_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(membership.id.to_string())
        .bind(membership.user_id.to_string())
        .bind(membership.group_id.to_string())
        .bind(membership.invite_id.to_string())
        .bind(membership.is_admin)
        .bind(membership.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Number of memberships granted through the given invite.
    pub async fn count_by_invite<'e, E>(executor: E, invite_id: Uuid) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM group_memberships WHERE invite_id = ?")
                .bind(invite_id.to_string())
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    pub async fn find_by_user<'e, E>(
        executor: E,
        user_id: Uuid,
    ) -> DbErrorResult<Vec<GroupMembership>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, GroupMembershipRow>(
            r#"
              SELECT id, user_id, group_id, invite_id, is_admin, created_at
              FROM group_memberships
              WHERE user_id = ?
              ORDER BY created_at ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(GroupMembershipRow::into_membership)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
