//! Storage layer for the catalog service
//!
//! This module provides data persistence backed by a relational database.

/// Database storage module
pub mod database;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer owning the database backend
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection handle
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        info!("Storage layer initialized successfully");

        Ok(Self { database })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        self.database.migrate().await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Health check for the storage backend
    pub async fn health_check(&self) -> Result<()> {
        match self.database.health_check().await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Database health check failed: {}", e);
                Err(e)
            }
        }
    }
}
