//! Create/read/update/delete for one entity, with validation in front of
//! every write.

use crate::{
    EntitySchema, Fields, Outcome, Record, RecordId, RecordStore, Result as CoreErrorResult,
    Submission, ValidationResult, validate,
};

use std::sync::Arc;

use log::{debug, info};

/// Stateless between calls: everything persistent lives in the store.
#[derive(Clone)]
pub struct RecordManager {
    store: Arc<dyn RecordStore>,
    schema: Arc<EntitySchema>,
}

impl RecordManager {
    pub fn new(store: Arc<dyn RecordStore>, schema: Arc<EntitySchema>) -> Self {
        Self { store, schema }
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn entity(&self) -> &str {
        &self.schema.name
    }

    pub fn validate(&self, fields: &Fields) -> ValidationResult {
        validate(&self.schema, fields)
    }

    /// Validate then insert. Invalid input never reaches the store.
    pub async fn create(&self, fields: &Fields) -> CoreErrorResult<RecordId> {
        self.check(fields)?;

        let id = self
            .store
            .insert(self.entity(), &self.schema.extract(fields))
            .await?;
        info!("Created {} record {}", self.entity(), id);
        Ok(id)
    }

    pub async fn get(&self, id: RecordId) -> CoreErrorResult<Record> {
        self.store.get(self.entity(), id).await
    }

    pub async fn list(&self) -> CoreErrorResult<Vec<Record>> {
        self.store.list(self.entity()).await
    }

    /// Existence is checked before validation, so a missing id reports
    /// NotFound even when the submitted values are also invalid.
    pub async fn update(&self, id: RecordId, fields: &Fields) -> CoreErrorResult<()> {
        self.store.get(self.entity(), id).await?;
        self.check(fields)?;

        self.store
            .update(self.entity(), id, &self.schema.extract(fields))
            .await?;
        info!("Updated {} record {}", self.entity(), id);
        Ok(())
    }

    pub async fn delete(&self, id: RecordId) -> CoreErrorResult<()> {
        self.store.delete(self.entity(), id).await?;
        info!("Deleted {} record {}", self.entity(), id);
        Ok(())
    }

    /// Run a form submission and pick the response for it.
    pub async fn submit(
        &self,
        submission: Submission,
        fields: Fields,
    ) -> CoreErrorResult<Outcome> {
        let result = match submission {
            Submission::Create => self.create(&fields).await.map(|_| ()),
            Submission::Update(id) => self.update(id, &fields).await,
        };

        Outcome::select(result, fields, self.schema.listing_path())
    }

    fn check(&self, fields: &Fields) -> CoreErrorResult<()> {
        let result = self.validate(fields);
        if let Some(errors) = result.errors() {
            debug!("Rejected {} submission: {}", self.entity(), errors);
        }
        result.into_result(self.entity())
    }
}
