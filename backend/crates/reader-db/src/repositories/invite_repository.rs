use crate::conversions::{parse_timestamp, parse_timestamp_millis, parse_uuid};
use crate::repositories::group_repository::GroupRow;
use crate::Result as DbErrorResult;

use reader_core::{Invite, InviteWithGroup};

use sqlx::FromRow;

#[derive(FromRow)]
struct InviteWithGroupRow {
    id: String,
    code: String,
    group_id: String,
    created_by: String,
    /// Unix milliseconds, so sub-second expiries are not cut short
    expiration_time: i64,
    max_members: i64,
    created_at: i64,
    group_name: String,
    group_created_by: String,
    group_created_at: i64,
}

impl InviteWithGroupRow {
    fn into_invite_with_group(self) -> DbErrorResult<InviteWithGroup> {
        let group = GroupRow {
            id: self.group_id.clone(),
            name: self.group_name,
            created_by: self.group_created_by,
            created_at: self.group_created_at,
        }
        .into_group()?;

        let invite = Invite {
            id: parse_uuid(&self.id, "invites.id")?,
            code: self.code,
            group_id: group.id,
            created_by: parse_uuid(&self.created_by, "invites.created_by")?,
            expiration_time: parse_timestamp_millis(
                self.expiration_time,
                "invites.expiration_time",
            )?,
            max_members: self.max_members,
            created_at: parse_timestamp(self.created_at, "invites.created_at")?,
        };

        Ok(InviteWithGroup { invite, group })
    }
}

pub struct InviteRepository;

impl InviteRepository {
    pub async fn create<'e, E>(executor: E, invite: &Invite) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO invites (
                  id, code, group_id, created_by,
                  expiration_time, max_members, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(invite.id.to_string())
        .bind(&invite.code)
        .bind(invite.group_id.to_string())
        .bind(invite.created_by.to_string())
        .bind(invite.expiration_time.timestamp_millis())
        .bind(invite.max_members)
        .bind(invite.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Look up an invite by its code, loading the group it belongs to.
    pub async fn find_by_code_with_group<'e, E>(
        executor: E,
        code: &str,
    ) -> DbErrorResult<Option<InviteWithGroup>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, InviteWithGroupRow>(
            r#"
              SELECT i.id, i.code, i.group_id, i.created_by,
                     i.expiration_time, i.max_members, i.created_at,
                     g.name AS group_name,
                     g.created_by AS group_created_by,
                     g.created_at AS group_created_at
              FROM invites i
              INNER JOIN user_groups g ON g.id = i.group_id
              WHERE i.code = ?
              "#,
        )
        .bind(code)
        .fetch_optional(executor)
        .await?;

        row.map(InviteWithGroupRow::into_invite_with_group)
            .transpose()
    }
}
