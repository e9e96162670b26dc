use crate::{FieldSpec, Fields};

use serde::Serialize;

/// The field layout of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    /// URL-safe name, e.g. "users"
    pub name: String,
    /// Display name, e.g. "User"
    pub label: String,
    pub fields: Vec<FieldSpec>,
}

impl EntitySchema {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Keep only the declared fields; absent ones become empty strings.
    pub fn extract(&self, submitted: &Fields) -> Fields {
        self.fields
            .iter()
            .map(|spec| {
                let value = submitted.get(&spec.name).cloned().unwrap_or_default();
                (spec.name.clone(), value)
            })
            .collect()
    }

    /// Every declared field mapped to an empty value (a fresh form).
    pub fn blank_values(&self) -> Fields {
        self.extract(&Fields::new())
    }

    /// Path of the listing view for this entity.
    pub fn listing_path(&self) -> String {
        format!("/records/{}", self.name)
    }
}
