//! Process-local record store backed by a map behind an async lock.

use crate::{CoreError, Fields, Record, RecordId, RecordStore, Result as CoreErrorResult};

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    records: BTreeMap<RecordId, Record>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all entities.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, entity: &str, fields: &Fields) -> CoreErrorResult<RecordId> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = RecordId(inner.last_id);
        inner
            .records
            .insert(id, Record::new(id, entity, fields.clone()));
        Ok(id)
    }

    async fn get(&self, entity: &str, id: RecordId) -> CoreErrorResult<Record> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(&id)
            .filter(|r| r.entity == entity)
            .cloned()
            .ok_or_else(|| CoreError::not_found(entity, id))
    }

    async fn update(&self, entity: &str, id: RecordId, fields: &Fields) -> CoreErrorResult<()> {
        let mut inner = self.inner.write().await;
        match inner.records.get_mut(&id) {
            Some(record) if record.entity == entity => {
                record.fields = fields.clone();
                record.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(CoreError::not_found(entity, id)),
        }
    }

    async fn delete(&self, entity: &str, id: RecordId) -> CoreErrorResult<()> {
        let mut inner = self.inner.write().await;
        let exists = inner
            .records
            .get(&id)
            .is_some_and(|record| record.entity == entity);

        if !exists {
            return Err(CoreError::not_found(entity, id));
        }

        inner.records.remove(&id);
        Ok(())
    }

    async fn list(&self, entity: &str) -> CoreErrorResult<Vec<Record>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .values()
            .filter(|r| r.entity == entity)
            .cloned()
            .collect())
    }
}
