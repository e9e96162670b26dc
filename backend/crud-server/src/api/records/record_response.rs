use crate::RecordDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub entity: String,
    pub record: RecordDto,
}
