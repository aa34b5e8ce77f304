use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_from_address_without_at_sign_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _from = EnvGuard::set("READER_EMAIL_FROM_ADDRESS", "no-reply");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_from_address_with_empty_domain_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _from = EnvGuard::set("READER_EMAIL_FROM_ADDRESS", "no-reply@");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_email_disabled_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _enabled = EnvGuard::set("READER_EMAIL_ENABLED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}
