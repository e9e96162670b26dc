#![allow(dead_code)]

use crud_core::Fields;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    crud_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Build a `Fields` map from literal pairs
pub fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn test_user() -> Fields {
    fields(&[("name", "Sam"), ("email", "s@x.com"), ("password", "abcdef")])
}
