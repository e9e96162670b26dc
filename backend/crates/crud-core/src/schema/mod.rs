pub mod builtin;
pub mod entity_schema;
pub mod field_kind;
pub mod field_spec;
pub mod rule;
pub mod schema_registry;
