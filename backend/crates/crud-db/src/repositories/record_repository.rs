//! SQLite-backed record store.
//!
//! All entities share the `records` table. Field values are stored as a JSON
//! object in the `fields` column and timestamps as unix seconds.

use crate::{DbError, Result as DbErrorResult};

use crud_core::{CoreError, Fields, Record, RecordId, RecordStore, Result as CoreErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    entity: String,
    fields: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<RecordRow> for Record {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: RecordRow) -> DbErrorResult<Self> {
        Ok(Record {
            id: RecordId(row.id),
            fields: serde_json::from_str(&row.fields)?,
            created_at: timestamp(row.created_at, "created_at")?,
            updated_at: timestamp(row.updated_at, "updated_at")?,
            entity: row.entity,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::CorruptRow {
        message: format!("Invalid timestamp in records.{column}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, entity: &str, fields: &Fields) -> DbErrorResult<RecordId> {
        let fields_json = serde_json::to_string(fields)?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO records (entity, fields, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(entity)
        .bind(fields_json)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(RecordId(result.last_insert_rowid()))
    }

    pub async fn find_by_id(&self, entity: &str, id: RecordId) -> DbErrorResult<Option<Record>> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
                SELECT id, entity, fields, created_at, updated_at
                FROM records
                WHERE id = ? AND entity = ?
            "#,
        )
        .bind(id.value())
        .bind(entity)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Record::try_from).transpose()
    }

    pub async fn find_all(&self, entity: &str) -> DbErrorResult<Vec<Record>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
                SELECT id, entity, fields, created_at, updated_at
                FROM records
                WHERE entity = ?
                ORDER BY id ASC
            "#,
        )
        .bind(entity)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Record::try_from).collect()
    }

    /// Returns false when no row matched.
    pub async fn update_fields(
        &self,
        entity: &str,
        id: RecordId,
        fields: &Fields,
    ) -> DbErrorResult<bool> {
        let fields_json = serde_json::to_string(fields)?;

        let result = sqlx::query(
            r#"
                UPDATE records
                SET fields = ?, updated_at = ?
                WHERE id = ? AND entity = ?
            "#,
        )
        .bind(fields_json)
        .bind(Utc::now().timestamp())
        .bind(id.value())
        .bind(entity)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row matched.
    pub async fn delete_by_id(&self, entity: &str, id: RecordId) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM records WHERE id = ? AND entity = ?")
            .bind(id.value())
            .bind(entity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self, entity: &str) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records WHERE entity = ?")
            .bind(entity)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl RecordStore for RecordRepository {
    async fn insert(&self, entity: &str, fields: &Fields) -> CoreErrorResult<RecordId> {
        Ok(self.create(entity, fields).await?)
    }

    async fn get(&self, entity: &str, id: RecordId) -> CoreErrorResult<Record> {
        self.find_by_id(entity, id)
            .await?
            .ok_or_else(|| CoreError::not_found(entity, id))
    }

    async fn update(&self, entity: &str, id: RecordId, fields: &Fields) -> CoreErrorResult<()> {
        if self.update_fields(entity, id, fields).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(entity, id))
        }
    }

    async fn delete(&self, entity: &str, id: RecordId) -> CoreErrorResult<()> {
        if self.delete_by_id(entity, id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(entity, id))
        }
    }

    async fn list(&self, entity: &str) -> CoreErrorResult<Vec<Record>> {
        Ok(self.find_all(entity).await?)
    }

    async fn ping(&self) -> CoreErrorResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;
        Ok(())
    }
}
