use crate::{Fields, Record, RecordId, Result as CoreErrorResult};

use async_trait::async_trait;

/// Persistence contract used by [`crate::RecordManager`].
///
/// Records are partitioned by entity name. `get`, `update` and `delete` fail
/// with `CoreError::NotFound` when the id does not exist for that entity.
/// Implementations must make each single-record write atomic.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record and return its freshly assigned id.
    async fn insert(&self, entity: &str, fields: &Fields) -> CoreErrorResult<RecordId>;

    async fn get(&self, entity: &str, id: RecordId) -> CoreErrorResult<Record>;

    /// Overwrite the fields of an existing record.
    async fn update(&self, entity: &str, id: RecordId, fields: &Fields) -> CoreErrorResult<()>;

    async fn delete(&self, entity: &str, id: RecordId) -> CoreErrorResult<()>;

    /// All records of `entity`, ordered by id.
    async fn list(&self, entity: &str) -> CoreErrorResult<Vec<Record>>;

    /// Cheap reachability check used by readiness probes.
    async fn ping(&self) -> CoreErrorResult<()> {
        Ok(())
    }
}
