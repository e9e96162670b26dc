//! Query strings and form bodies for the arithmetic and form demos.
//!
//! Every field defaults to empty so a missing input is reported by the
//! handler instead of rejected by the extractor.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddQuery {
    pub num1: String,
    pub num2: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OperationQuery {
    pub value1: String,
    pub value2: String,
    pub operation: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddForm {
    pub num1: String,
    pub num2: String,
}

/// Non-empty run of ASCII digits that fits in a u64.
pub fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Sum of two digit strings; None when either is not a number.
pub fn add_digits(a: &str, b: &str) -> Option<u128> {
    Some(u128::from(parse_digits(a)?) + u128::from(parse_digits(b)?))
}
