use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_min_password_length_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _len = EnvGuard::set("CRUD_VALIDATION_MIN_PASSWORD_LENGTH", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_min_password_length_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _len = EnvGuard::set("CRUD_VALIDATION_MIN_PASSWORD_LENGTH", "129");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_min_password_length_override_when_load_then_applied() {
    // Given
    let _temp = setup_config_dir();
    let _len = EnvGuard::set("CRUD_VALIDATION_MIN_PASSWORD_LENGTH", "12");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validation.min_password_length, eq(12));
    assert_that!(config.validate(), ok(anything()));
}
