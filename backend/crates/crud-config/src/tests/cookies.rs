use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use serial_test::serial;

#[test]
#[serial]
fn given_defaults_when_load_then_cookie_lifetimes_match_demo_values() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.cookies.username_max_age_secs, eq(15));
    assert_that!(config.cookies.theme_max_age_secs, eq(3600));
    assert_that!(config.cookies.last_visited_max_age_secs, eq(3600));
}

#[test]
#[serial]
fn given_zero_max_age_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _age = EnvGuard::set("CRUD_COOKIE_THEME_MAX_AGE_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_default_theme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _theme = EnvGuard::set("CRUD_DEFAULT_THEME", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
