use crud_core::{Fields, Record};

use serde::Serialize;

/// Record DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct RecordDto {
    pub id: i64,
    pub fields: Fields,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Record> for RecordDto {
    fn from(r: Record) -> Self {
        Self {
            id: r.id.value(),
            fields: r.fields,
            created_at: r.created_at.timestamp(),
            updated_at: r.updated_at.timestamp(),
        }
    }
}
