use crate::api::demos::menu::price_of;
use crate::api::demos::number_forms::{add_digits, parse_digits};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_digits_when_parsed_then_value() {
    assert_that!(parse_digits("042"), some(eq(42)));
}

#[test]
fn given_sign_or_space_when_parsed_then_rejected() {
    assert_that!(parse_digits("-1"), none());
    assert_that!(parse_digits("+1"), none());
    assert_that!(parse_digits(" 1"), none());
    assert_that!(parse_digits(""), none());
    assert_that!(parse_digits("1.5"), none());
}

#[test]
fn given_digits_beyond_u64_when_parsed_then_rejected() {
    assert_that!(parse_digits("99999999999999999999999"), none());
}

#[test]
fn given_two_max_values_when_added_then_no_overflow() {
    let max = u64::MAX.to_string();

    assert_that!(
        add_digits(&max, &max),
        some(eq(u128::from(u64::MAX) * 2))
    );
}

#[test]
fn given_menu_item_when_price_of_then_case_sensitive() {
    assert_that!(price_of("Pizza"), some(eq("Price is 320")));
    assert_that!(price_of("pizza"), none());
}
