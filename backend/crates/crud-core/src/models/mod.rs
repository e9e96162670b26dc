pub mod field_errors;
pub mod fields;
pub mod record;
pub mod record_id;
