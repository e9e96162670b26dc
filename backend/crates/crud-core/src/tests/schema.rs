use crate::schema::builtin::{BLOGS, BOOKS, USERS};
use crate::tests::fields;
use crate::{CoreError, FieldKind, Rule, SchemaRegistry};

use googletest::prelude::*;

#[test]
fn given_builtin_registry_then_all_entities_resolve() {
    let registry = SchemaRegistry::builtin(6);

    let names: Vec<&str> = registry.names().collect();

    assert_eq!(names, vec![BLOGS, BOOKS, USERS]);
}

#[test]
fn given_unknown_entity_when_resolved_then_unknown_entity_error() {
    let registry = SchemaRegistry::builtin(6);

    let result = registry.resolve("widgets");

    assert!(matches!(result, Err(CoreError::UnknownEntity { .. })));
}

#[test]
fn given_users_schema_then_password_rules_follow_configuration() {
    let registry = SchemaRegistry::builtin(8);
    let users = registry.resolve(USERS).unwrap();

    let password = users.field_named("password").unwrap();

    assert_that!(password.kind, eq(FieldKind::Password));
    assert_that!(password.is_required(), eq(true));
    assert_that!(password.rules.contains(&Rule::MinLength(8)), eq(true));
}

#[test]
fn given_partial_submission_when_extracted_then_declared_fields_only() {
    let registry = SchemaRegistry::builtin(6);
    let blogs = registry.resolve(BLOGS).unwrap();

    let extracted = blogs.extract(&fields(&[("title", "Hello"), ("thumbnail", "x.png")]));

    assert_that!(extracted, eq(&fields(&[("body", ""), ("title", "Hello")])));
}

#[test]
fn given_schema_then_listing_path_uses_entity_name() {
    let registry = SchemaRegistry::builtin(6);

    assert_that!(
        registry.resolve(BOOKS).unwrap().listing_path(),
        eq("/records/books")
    );
}
