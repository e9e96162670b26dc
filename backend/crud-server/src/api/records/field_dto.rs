use crud_core::{FieldKind, FieldSpec};

use serde::Serialize;

/// What a client needs to render one form input
#[derive(Debug, Serialize)]
pub struct FieldDto {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl From<&FieldSpec> for FieldDto {
    fn from(spec: &FieldSpec) -> Self {
        Self {
            name: spec.name.clone(),
            label: spec.label.clone(),
            kind: spec.kind,
            required: spec.is_required(),
        }
    }
}
