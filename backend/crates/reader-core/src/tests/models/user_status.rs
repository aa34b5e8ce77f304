use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::Pending.as_str(), "PENDING");
    assert_eq!(UserStatus::Active.as_str(), "ACTIVE");
}

#[test]
fn test_user_status_from_str() {
    assert_eq!(
        UserStatus::from_str("PENDING").unwrap(),
        UserStatus::Pending
    );
    assert_eq!(UserStatus::from_str("ACTIVE").unwrap(), UserStatus::Active);
    assert!(UserStatus::from_str("active").is_err());
    assert!(UserStatus::from_str("BLOCKED").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}
