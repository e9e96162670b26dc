//! Record entity - a row of text fields belonging to one entity schema.

use crate::{Fields, RecordId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Name of the schema this record belongs to (e.g. "users")
    pub entity: String,
    pub fields: Fields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(id: RecordId, entity: &str, fields: Fields) -> Self {
        let now = Utc::now();
        Self {
            id,
            entity: entity.to_string(),
            fields,
            created_at: now,
            updated_at: now,
        }
    }
}
