use crate::FieldDto;

use crud_core::{EntitySchema, FieldErrors, Fields};

use serde::Serialize;

/// A form to display: layout, current values and any messages.
///
/// Served empty for a new record, prefilled for an edit, and with the
/// submitted values plus errors when a submission is rejected.
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub entity: String,
    pub label: String,
    /// Where the form posts to
    pub action: String,
    pub fields: Vec<FieldDto>,
    pub values: Fields,
    pub errors: FieldErrors,
}

impl FormResponse {
    pub fn new(schema: &EntitySchema, action: String, values: &Fields, errors: FieldErrors) -> Self {
        Self {
            entity: schema.name.clone(),
            label: schema.label.clone(),
            action,
            fields: schema.fields.iter().map(FieldDto::from).collect(),
            values: schema.extract(values),
            errors,
        }
    }
}
