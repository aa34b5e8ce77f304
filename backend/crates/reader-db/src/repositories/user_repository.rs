//! User persistence.
//!
//! Email lookups are case-insensitive and always eagerly load the profile,
//! since signup needs to tell "taken" apart from "taken but never finished".

use crate::conversions::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use reader_core::{AuthProvider, Profile, User, UserStatus, UserWithProfile, normalize_email};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    source: String,
    source_user_id: Option<String>,
    email: String,
    name: String,
    password: Option<String>,
    status: String,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: parse_uuid(&self.id, "users.id")?,
            provider: AuthProvider::from_parts(&self.source, self.source_user_id)?,
            email: self.email,
            name: self.name,
            password: self.password,
            status: UserStatus::from_str(&self.status)?,
            created_at: parse_timestamp(self.created_at, "users.created_at")?,
            updated_at: parse_timestamp(self.updated_at, "users.updated_at")?,
        })
    }
}

#[derive(FromRow)]
struct UserWithProfileRow {
    #[sqlx(flatten)]
    user: UserRow,
    profile_id: Option<String>,
    profile_username: Option<String>,
    profile_picture_url: Option<String>,
    profile_bio: Option<String>,
    profile_created_at: Option<i64>,
    profile_updated_at: Option<i64>,
}

impl UserWithProfileRow {
    fn into_user_with_profile(self) -> DbErrorResult<UserWithProfile> {
        let user = self.user.into_user()?;

        let profile = match (
            self.profile_id,
            self.profile_username,
            self.profile_created_at,
            self.profile_updated_at,
        ) {
            (Some(id), Some(username), Some(created_at), Some(updated_at)) => Some(Profile {
                id: parse_uuid(&id, "profiles.id")?,
                user_id: user.id,
                username,
                picture_url: self.profile_picture_url,
                bio: self.profile_bio,
                created_at: parse_timestamp(created_at, "profiles.created_at")?,
                updated_at: parse_timestamp(updated_at, "profiles.updated_at")?,
            }),
            _ => None,
        };

        Ok(UserWithProfile { user, profile })
    }
}

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, source, source_user_id, email, email_normalized,
                  name, password, status, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(user.provider.source())
        .bind(user.provider.source_user_id())
        .bind(&user.email)
        .bind(normalize_email(&user.email))
        .bind(&user.name)
        .bind(user.password.as_deref())
        .bind(user.status.as_str())
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, source, source_user_id, email, name,
                     password, status, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Case-insensitive email lookup with the profile joined in.
    pub async fn find_by_email<'e, E>(
        executor: E,
        email: &str,
    ) -> DbErrorResult<Option<UserWithProfile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserWithProfileRow>(
            r#"
              SELECT u.id, u.source, u.source_user_id, u.email, u.name,
                     u.password, u.status, u.created_at, u.updated_at,
                     p.id AS profile_id,
                     p.username AS profile_username,
                     p.picture_url AS profile_picture_url,
                     p.bio AS profile_bio,
                     p.created_at AS profile_created_at,
                     p.updated_at AS profile_updated_at
              FROM users u
              LEFT JOIN profiles p ON p.user_id = u.id
              WHERE u.email_normalized = ?
              "#,
        )
        .bind(normalize_email(email))
        .fetch_optional(executor)
        .await?;

        row.map(UserWithProfileRow::into_user_with_profile)
            .transpose()
    }

    /// Returns false when no user has the given id.
    pub async fn update_status<'e, E>(
        executor: E,
        id: Uuid,
        status: UserStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE users SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
