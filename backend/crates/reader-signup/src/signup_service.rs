//! Signup workflow.
//!
//! The existence check runs before the transaction and the confirmation
//! email after it. Concurrent signups for the same email can both pass the
//! check; the unique index on `email_normalized` rejects the loser.

use crate::{
    ConfirmationEmailSender, CreateUserInput, Result as SignupResult, SignupError,
    UsernamePolicy, create_default_filters, sender_from_config, validate_invite,
};

use reader_config::Config;
use reader_core::{GroupMembership, InviteWithGroup, Profile, User, UserStatus};
use reader_db::{GroupMembershipRepository, InviteRepository, ProfileRepository, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use mockable::{Clock, DefaultClock};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SignupService {
    pool: SqlitePool,
    username_policy: UsernamePolicy,
    email_sender: Arc<dyn ConfirmationEmailSender>,
    clock: Arc<dyn Clock>,
}

impl SignupService {
    pub fn new(
        pool: SqlitePool,
        username_policy: UsernamePolicy,
        email_sender: Arc<dyn ConfirmationEmailSender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pool,
            username_policy,
            email_sender,
            clock,
        }
    }

    /// Wire the service from loaded configuration with the system clock.
    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self::new(
            pool,
            UsernamePolicy::from_config(&config.signup),
            sender_from_config(&config.email),
            Arc::new(DefaultClock),
        )
    }

    /// Create an account, or finish one that exists without a profile.
    pub async fn create_user(&self, input: CreateUserInput) -> SignupResult<(User, Profile)> {
        let email = input.email.trim().to_string();
        let now = self.clock.utc();

        // 1. Existing account?
        if let Some(existing) = UserRepository::find_by_email(&self.pool, &email).await? {
            if existing.profile.is_some() {
                return Err(SignupError::UserExists {
                    email,
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            // Account exists but signup never finished: attach a profile only
            let profile = Profile::new(
                existing.user.id,
                input.username.clone(),
                input.picture_url.clone(),
                input.bio.clone(),
                now,
            );
            ProfileRepository::create(&self.pool, &profile).await?;

            info!(
                "Attached profile {} to existing user {}",
                profile.username, existing.user.id
            );
            return Ok((existing.user, profile));
        }

        // 2. Username policy, before anything is written
        if !self.username_policy.validate(&input.username) {
            return Err(SignupError::InvalidUsername {
                username: input.username,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 3. Everything else commits or rolls back together
        let mut tx = self.pool.begin().await?;
        let (user, profile) = match persist_signup(&mut tx, &input, &email, now).await {
            Ok(created) => created,
            Err(e) => {
                // Transaction rolls back on drop
                warn!("Signup transaction for {} failed: {}", email, e);
                return Err(e);
            }
        };
        tx.commit().await?;
        debug!("Signup transaction for user {} committed", user.id);

        // 4. Confirmation email; the account stays committed either way
        if user.is_pending() && !self.email_sender.send_confirmation_email(&user).await {
            warn!("Confirmation email for user {} could not be sent", user.id);
            return Err(SignupError::InvalidEmail {
                user_id: user.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(
            "Created user {} ({}) with status {}",
            user.id, profile.username, user.status
        );
        Ok((user, profile))
    }

    /// Activate a pending account. `None` when the user does not exist.
    pub async fn confirm_user(&self, user_id: Uuid) -> SignupResult<Option<User>> {
        let Some(mut user) = UserRepository::find_by_id(&self.pool, user_id).await? else {
            return Ok(None);
        };

        if user.status == UserStatus::Active {
            debug!("User {} already active", user_id);
            return Ok(Some(user));
        }

        let now = self.clock.utc();
        UserRepository::update_status(&self.pool, user_id, UserStatus::Active, now).await?;
        user.status = UserStatus::Active;
        user.updated_at = now;

        info!("Confirmed user {}", user_id);
        Ok(Some(user))
    }
}

/// Transactional part of signup: invite check, user, profile, membership
/// and default filters. Every statement runs on `tx`.
pub async fn persist_signup(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    input: &CreateUserInput,
    email: &str,
    now: DateTime<Utc>,
) -> SignupResult<(User, Profile)> {
    let invite = match input.invite_code.as_deref() {
        Some(code) => redeemable_invite(tx, code, now).await?,
        None => None,
    };

    let status = if input.pending_confirmation {
        UserStatus::Pending
    } else {
        UserStatus::Active
    };
    let user = User::new(
        input.provider.clone(),
        email.to_string(),
        input.name.clone(),
        input.password.clone(),
        status,
        now,
    );
    UserRepository::create(&mut **tx, &user).await?;

    let profile = Profile::new(
        user.id,
        input.username.clone(),
        input.picture_url.clone(),
        input.bio.clone(),
        now,
    );
    ProfileRepository::create(&mut **tx, &profile).await?;

    if let Some(InviteWithGroup { invite, group }) = invite {
        let membership = GroupMembership::new(user.id, group.id, invite.id, now);
        GroupMembershipRepository::create(&mut **tx, &membership).await?;
        info!(
            "User {} joined group {} ({}) via invite {}",
            user.id, group.id, group.name, invite.code
        );
    }

    create_default_filters(tx, user.id, now).await?;

    Ok((user, profile))
}

/// Invite for `code` if it exists and passes validation.
async fn redeemable_invite(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    code: &str,
    now: DateTime<Utc>,
) -> SignupResult<Option<InviteWithGroup>> {
    let Some(found) = InviteRepository::find_by_code_with_group(&mut **tx, code).await? else {
        info!("Ignoring unknown invite code {}", code);
        return Ok(None);
    };

    let check = validate_invite(tx, &found.invite, now).await?;
    Ok(check.is_valid().then_some(found))
}
