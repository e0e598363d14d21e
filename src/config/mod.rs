//! Configuration management for the catalog service
//!
//! This module handles loading, validation, and management of all service
//! configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{CatalogError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the catalog service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog service configuration
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Config(format!("Failed to read config file: {}", e)))?;

        let catalog: CatalogConfig = serde_yaml::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { catalog };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let catalog = CatalogConfig::from_env()?;
        let config = Self { catalog };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.catalog.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.catalog.storage
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.catalog.validate()?;
        self.catalog.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }
}
