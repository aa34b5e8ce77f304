use crate::UsernamePolicy;

use googletest::prelude::*;

fn policy() -> UsernamePolicy {
    UsernamePolicy::new(4, 15, vec!["admin".to_string(), "Support".to_string()])
}

#[test]
fn given_lowercase_alphanumeric_username_when_validated_then_accepted() {
    let policy = policy();

    assert_that!(policy.validate("reader"), eq(true));
    assert_that!(policy.validate("book_worm_42"), eq(true));
    assert_that!(policy.validate("1234"), eq(true));
}

#[test]
fn given_length_outside_bounds_when_validated_then_rejected() {
    let policy = policy();

    assert_that!(policy.validate("abc"), eq(false));
    assert_that!(policy.validate("abcd"), eq(true));
    assert_that!(policy.validate("abcdefghijklmno"), eq(true));
    assert_that!(policy.validate("abcdefghijklmnop"), eq(false));
    assert_that!(policy.validate(""), eq(false));
}

#[test]
fn given_disallowed_characters_when_validated_then_rejected() {
    let policy = policy();

    assert_that!(policy.validate("Reader"), eq(false));
    assert_that!(policy.validate("read-er"), eq(false));
    assert_that!(policy.validate("read er"), eq(false));
    assert_that!(policy.validate("léa_reads"), eq(false));
}

#[test]
fn given_leading_or_trailing_underscore_when_validated_then_rejected() {
    let policy = policy();

    assert_that!(policy.validate("_reader"), eq(false));
    assert_that!(policy.validate("reader_"), eq(false));
}

#[test]
fn given_reserved_name_when_validated_then_rejected_regardless_of_config_case() {
    let policy = policy();

    assert_that!(policy.validate("admin"), eq(false));
    // Reserved list entry was "Support"
    assert_that!(policy.validate("support"), eq(false));
    assert_that!(policy.validate("admins"), eq(true));
}

#[test]
fn given_default_policy_when_validating_reserved_root_then_rejected() {
    let policy = UsernamePolicy::default();

    assert_that!(policy.validate("root"), eq(false));
    assert_that!(policy.validate("rootbeer"), eq(true));
}
