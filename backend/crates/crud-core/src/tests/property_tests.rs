use crate::schema::builtin::users_schema;
use crate::tests::fields;
use crate::validate;

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Validation
// =========================================================================

proptest! {
    #[test]
    fn given_any_blank_required_field_when_validated_then_reported(
        field in prop_oneof![Just("name"), Just("email"), Just("password")],
        blank in r"\s{0,5}",
    ) {
        let mut submitted = fields(&[("name", "Sam"), ("email", "s@x.com"), ("password", "abcdef")]);
        submitted.insert(field.to_string(), blank);

        let result = validate(&users_schema(6), &submitted);

        prop_assert!(result.errors().is_some_and(|e| e.contains(field)));
    }

    #[test]
    fn given_short_password_when_validated_then_invalid(
        min in 1usize..20,
        password in "[a-zA-Z0-9]{1,40}",
    ) {
        let submitted = fields(&[("name", "Sam"), ("email", "s@x.com"), ("password", password.as_str())]);

        let result = validate(&users_schema(min), &submitted);

        prop_assert_eq!(result.is_valid(), password.len() >= min);
    }

    #[test]
    fn given_valid_users_when_validated_then_errors_never_reported(
        name in "[a-zA-Z]{1,100}",
        local in "[a-z0-9]{1,20}",
        domain in "[a-z]{1,20}",
        password in "[a-zA-Z0-9!@#]{6,64}",
    ) {
        let email = format!("{local}@{domain}.com");
        let submitted = fields(&[("name", name.as_str()), ("email", email.as_str()), ("password", password.as_str())]);

        prop_assert!(validate(&users_schema(6), &submitted).is_valid());
    }
}
