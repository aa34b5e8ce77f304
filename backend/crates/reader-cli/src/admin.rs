//! Administrative operations behind the `group` and `user` commands.

use crate::{CliError, Result as CliErrorResult};

use reader_core::{Filter, Group, Invite, Profile, User};
use reader_db::{FilterRepository, GroupRepository, InviteRepository, UserRepository};

use chrono::{DateTime, Duration, Utc};
use log::info;
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

const INVITE_CODE_LENGTH: usize = 12;

/// Group plus the invite that lets users join it.
#[derive(Debug, Serialize)]
pub struct CreatedGroup {
    pub group: Group,
    pub invite: Invite,
}

/// Everything stored for one account.
#[derive(Debug, Serialize)]
pub struct UserDetails {
    pub user: User,
    pub profile: Option<Profile>,
    pub filters: Vec<Filter>,
}

/// Random, upper-case invite code.
pub fn generate_invite_code() -> String {
    let mut code = Uuid::new_v4().simple().to_string();
    code.truncate(INVITE_CODE_LENGTH);
    code.to_uppercase()
}

/// Create a group owned by `creator_email` along with a fresh invite.
pub async fn create_group(
    pool: &SqlitePool,
    name: &str,
    creator_email: &str,
    max_members: i64,
    expires_in: Duration,
    now: DateTime<Utc>,
) -> CliErrorResult<CreatedGroup> {
    let expiration_time = now.checked_add_signed(expires_in).ok_or_else(|| {
        CliError::invalid_input(format!("Invite expiry {} is out of range", expires_in))
    })?;

    let creator = UserRepository::find_by_email(pool, creator_email.trim())
        .await?
        .ok_or_else(|| CliError::not_found(format!("User {}", creator_email)))?
        .user;

    let group = Group::new(name.to_string(), creator.id, now);
    let invite = Invite::new(
        generate_invite_code(),
        group.id,
        creator.id,
        expiration_time,
        max_members,
        now,
    );

    let mut tx = pool.begin().await?;
    GroupRepository::create(&mut *tx, &group).await?;
    InviteRepository::create(&mut *tx, &invite).await?;
    tx.commit().await?;

    info!(
        "Created group {} ({}) with invite {} for {} members",
        group.id, group.name, invite.code, invite.max_members
    );

    Ok(CreatedGroup { group, invite })
}

/// Look a user up by email, with profile and filters.
pub async fn show_user(pool: &SqlitePool, email: &str) -> CliErrorResult<UserDetails> {
    let found = UserRepository::find_by_email(pool, email.trim())
        .await?
        .ok_or_else(|| CliError::not_found(format!("User {}", email)))?;
    let filters = FilterRepository::find_by_user(pool, found.user.id).await?;

    Ok(UserDetails {
        user: found.user,
        profile: found.profile,
        filters,
    })
}
