use crate::RecordDto;

use serde::Serialize;

/// Listing of one entity's records, oldest first
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub entity: String,
    pub records: Vec<RecordDto>,
}
