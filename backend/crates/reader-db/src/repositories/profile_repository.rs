use crate::conversions::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use reader_core::Profile;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct ProfileRow {
    id: String,
    user_id: String,
    username: String,
    picture_url: Option<String>,
    bio: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl ProfileRow {
    fn into_profile(self) -> DbErrorResult<Profile> {
        Ok(Profile {
            id: parse_uuid(&self.id, "profiles.id")?,
            user_id: parse_uuid(&self.user_id, "profiles.user_id")?,
            username: self.username,
            picture_url: self.picture_url,
            bio: self.bio,
            created_at: parse_timestamp(self.created_at, "profiles.created_at")?,
            updated_at: parse_timestamp(self.updated_at, "profiles.updated_at")?,
        })
    }
}

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn create<'e, E>(executor: E, profile: &Profile) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO profiles (
                  id, user_id, username, picture_url, bio, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.user_id.to_string())
        .bind(&profile.username)
        .bind(profile.picture_url.as_deref())
        .bind(profile.bio.as_deref())
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_user_id<'e, E>(
        executor: E,
        user_id: Uuid,
    ) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT id, user_id, username, picture_url, bio, created_at, updated_at
              FROM profiles
              WHERE user_id = ?
              "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(ProfileRow::into_profile).transpose()
    }
}
