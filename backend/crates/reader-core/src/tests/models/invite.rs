use crate::Invite;

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

fn invite_expiring_at(offset: Duration, max_members: i64) -> (Invite, chrono::DateTime<Utc>) {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let invite = Invite::new(
        "JOINUS".to_string(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        now + offset,
        max_members,
        now,
    );
    (invite, now)
}

#[test]
fn test_invite_expiration_is_strict() {
    let (future, now) = invite_expiring_at(Duration::seconds(1), 5);
    assert!(!future.is_expired(now));

    let (exact, now) = invite_expiring_at(Duration::zero(), 5);
    assert!(exact.is_expired(now));

    let (past, now) = invite_expiring_at(Duration::days(-1), 5);
    assert!(past.is_expired(now));
}

#[test]
fn test_invite_capacity_is_strict() {
    let (invite, _) = invite_expiring_at(Duration::days(1), 2);

    assert!(invite.has_capacity(0));
    assert!(invite.has_capacity(1));
    assert!(!invite.has_capacity(2));
    assert!(!invite.has_capacity(3));
}
