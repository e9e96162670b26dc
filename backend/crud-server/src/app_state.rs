use crud_config::CookieConfig;
use crud_core::{RecordManager, RecordStore, Result as CoreErrorResult, SchemaRegistry};

use std::sync::Arc;

/// Shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub schemas: Arc<SchemaRegistry>,
    pub cookies: CookieConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, schemas: SchemaRegistry, cookies: CookieConfig) -> Self {
        Self {
            store,
            schemas: Arc::new(schemas),
            cookies,
        }
    }

    /// Manager for a registered entity; unknown names are an error.
    pub fn manager(&self, entity: &str) -> CoreErrorResult<RecordManager> {
        let schema = self.schemas.resolve(entity)?;
        Ok(RecordManager::new(self.store.clone(), schema))
    }
}
