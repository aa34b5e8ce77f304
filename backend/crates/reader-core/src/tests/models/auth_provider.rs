use crate::{AuthProvider, CoreError};

use googletest::prelude::*;

#[test]
fn given_email_provider_when_reading_parts_then_has_no_source_user_id() {
    let provider = AuthProvider::Email;

    assert_that!(provider.source(), eq("EMAIL"));
    assert_that!(provider.source_user_id(), none());
}

#[test]
fn given_google_provider_when_reading_parts_then_exposes_source_user_id() {
    let provider = AuthProvider::Google {
        source_user_id: "g-123".to_string(),
    };

    assert_that!(provider.source(), eq("GOOGLE"));
    assert_eq!(provider.source_user_id(), Some("g-123"));
}

#[test]
fn given_stored_parts_when_rebuilding_then_round_trips_each_provider() {
    let apple = AuthProvider::from_parts("APPLE", Some("a-1".to_string())).unwrap();
    assert_eq!(
        apple,
        AuthProvider::Apple {
            source_user_id: "a-1".to_string()
        }
    );

    // Email ignores a stray id column
    let email = AuthProvider::from_parts("EMAIL", Some("ignored".to_string())).unwrap();
    assert_eq!(email, AuthProvider::Email);
}

#[test]
fn given_oauth_source_without_id_when_rebuilding_then_error() {
    let result = AuthProvider::from_parts("GOOGLE", None);

    assert!(matches!(
        result,
        Err(CoreError::InvalidAuthProvider { .. })
    ));
}

#[test]
fn given_unknown_source_when_rebuilding_then_error() {
    let result = AuthProvider::from_parts("GITHUB", Some("x".to_string()));

    assert_that!(result, err(anything()));
}
