use chrono::{DateTime, Duration, Utc};
use reader_core::{AuthProvider, Group, Invite, Profile, User, UserStatus};
use uuid::Uuid;

/// Creates an active password-signup User
pub fn create_test_user(email: &str) -> User {
    User::new(
        AuthProvider::Email,
        email.to_string(),
        "Test User".to_string(),
        Some("$argon2id$hash".to_string()),
        UserStatus::Active,
        now(),
    )
}

/// Creates a Profile for the given user
pub fn create_test_profile(user_id: Uuid, username: &str) -> Profile {
    Profile::new(
        user_id,
        username.to_string(),
        Some("https://example.com/me.png".to_string()),
        None,
        now(),
    )
}

pub fn create_test_group(created_by: Uuid) -> Group {
    Group::new("Book Club".to_string(), created_by, now())
}

/// Creates an Invite valid for one more day
pub fn create_test_invite(group_id: Uuid, created_by: Uuid, code: &str) -> Invite {
    Invite::new(
        code.to_string(),
        group_id,
        created_by,
        now() + Duration::days(1),
        10,
        now(),
    )
}

/// Second-precision "now", matching what the database stores
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).expect("valid timestamp")
}
