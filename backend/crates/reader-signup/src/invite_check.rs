use reader_core::Invite;
use reader_db::{GroupMembershipRepository, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use log::info;

/// Outcome of checking whether an invite can still be redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteCheck {
    Valid,
    Expired,
    Full { members: i64 },
}

impl InviteCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// An invite is redeemable while it has not expired and has fewer members
/// than `max_members`. Rejections are logged; they never fail the caller.
pub async fn validate_invite(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    invite: &Invite,
    now: DateTime<Utc>,
) -> DbErrorResult<InviteCheck> {
    if invite.is_expired(now) {
        info!(
            "Rejecting invite {} ({}), expired at {}",
            invite.id, invite.code, invite.expiration_time
        );
        return Ok(InviteCheck::Expired);
    }

    let members = GroupMembershipRepository::count_by_invite(&mut **tx, invite.id).await?;
    if !invite.has_capacity(members) {
        info!(
            "Rejecting invite {} ({}), too many users: {} of {}",
            invite.id, invite.code, members, invite.max_members
        );
        return Ok(InviteCheck::Full { members });
    }

    Ok(InviteCheck::Valid)
}
