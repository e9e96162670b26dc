use crate::{CoreError, RecordId};

use googletest::prelude::*;

#[test]
fn given_positive_integer_when_parsed_then_ok() {
    assert_that!(RecordId::parse("42").ok(), some(eq(RecordId(42))));
}

#[test]
fn given_non_numeric_when_parsed_then_invalid_record_id() {
    for value in ["abc", "", "1.5", "0", "-3"] {
        let result = RecordId::parse(value);
        assert!(
            matches!(result, Err(CoreError::InvalidRecordId { .. })),
            "{value} should be rejected"
        );
    }
}

#[test]
fn given_record_id_when_displayed_then_plain_integer() {
    assert_that!(RecordId(17).to_string(), eq("17"));
}

#[test]
fn given_numeric_string_when_from_str_then_value_matches() {
    let id: RecordId = "9".parse().unwrap();
    assert_that!(id.value(), eq(9));
}
