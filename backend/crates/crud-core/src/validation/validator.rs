use crate::{EntitySchema, FieldErrors, Fields, ValidationResult};

/// Check every declared field of `schema` against the submitted values.
///
/// Undeclared keys are ignored. Pure: no store access, no logging.
pub fn validate(schema: &EntitySchema, fields: &Fields) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for spec in &schema.fields {
        let value = fields.get(&spec.name).map(String::as_str);
        if let Some(message) = spec.check(value) {
            errors.insert(&spec.name, message);
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}
