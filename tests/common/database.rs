//! Test database utilities
//!
//! Provides in-memory SQLite databases for testing without external
//! dependencies. Each test gets an isolated database instance using SeaORM.

use catalog_rs::config::{Config, DatabaseConfig, StorageConfig};
use catalog_rs::storage::StorageLayer;
use catalog_rs::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database using SeaORM
    ///
    /// Note: SQLite in-memory mode only supports a single connection; each
    /// call creates a completely isolated database instance.
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    }
}

/// Create a migrated storage layer on an in-memory database
pub async fn create_test_storage() -> StorageLayer {
    let config = StorageConfig {
        database: test_db_config(),
    };

    let storage = StorageLayer::new(&config)
        .await
        .expect("Failed to create test storage layer");
    storage.migrate().await.expect("Failed to run migrations");
    storage
}

/// Build a service configuration pointing at the in-memory database
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.catalog.storage.database = test_db_config();
    config
}
