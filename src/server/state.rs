//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::ingest::IngestService;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// This struct contains shared resources that need to be accessed across
/// multiple request handlers. All fields are wrapped in Arc for efficient
/// sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Product ingestion service
    pub ingest: Arc<IngestService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let storage = Arc::new(storage);
        let ingest = Arc::new(IngestService::new(Arc::clone(&storage)));

        Self {
            config: Arc::new(config),
            storage,
            ingest,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
