use crate::schema::builtin::{blogs_schema, books_schema, users_schema};
use crate::{CoreError, EntitySchema, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Lookup table from entity name to its schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Arc<EntitySchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `users`, `books` and `blogs` schemas.
    pub fn builtin(min_password_length: usize) -> Self {
        let mut registry = Self::new();
        registry.register(users_schema(min_password_length));
        registry.register(books_schema());
        registry.register(blogs_schema());
        registry
    }

    /// Add a schema, replacing any existing one with the same name.
    pub fn register(&mut self, schema: EntitySchema) {
        self.schemas.insert(schema.name.clone(), Arc::new(schema));
    }

    pub fn get(&self, name: &str) -> Option<Arc<EntitySchema>> {
        self.schemas.get(name).cloned()
    }

    #[track_caller]
    pub fn resolve(&self, name: &str) -> CoreErrorResult<Arc<EntitySchema>> {
        self.get(name).ok_or_else(|| CoreError::UnknownEntity {
            entity: name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}
