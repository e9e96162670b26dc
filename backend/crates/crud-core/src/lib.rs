pub mod error;
pub mod manager;
pub mod models;
pub mod schema;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use manager::outcome::{Outcome, Submission};
pub use manager::record_manager::RecordManager;
pub use models::field_errors::FieldErrors;
pub use models::fields::Fields;
pub use models::record::Record;
pub use models::record_id::RecordId;
pub use schema::entity_schema::EntitySchema;
pub use schema::field_kind::FieldKind;
pub use schema::field_spec::FieldSpec;
pub use schema::rule::Rule;
pub use schema::schema_registry::SchemaRegistry;
pub use store::in_memory_record_store::InMemoryRecordStore;
pub use store::record_store::RecordStore;
pub use validation::validation_result::ValidationResult;
pub use validation::validator::validate;
