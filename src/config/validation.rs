//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::utils::error::{CatalogError, Result};
use tracing::debug;

/// Validation behavior shared by all configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating catalog configuration");

        self.server.validate()?;
        self.storage.validate()?;

        debug!("Catalog configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err(CatalogError::Config(
                "Server host cannot be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(CatalogError::Config(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(CatalogError::Config(
                    "Worker count must be greater than 0".to_string(),
                ));
            }
        }

        self.cors.validate()?;

        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(CatalogError::Config(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating storage configuration");

        self.database.validate()?;

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(CatalogError::Config(
                "Database URL cannot be empty".to_string(),
            ));
        }

        let supported = ["sqlite:", "postgresql://", "postgres://"];
        if !supported.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err(CatalogError::Config(
                "Only SQLite and PostgreSQL databases are supported".to_string(),
            ));
        }

        if self.max_connections == 0 {
            return Err(CatalogError::Config(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(CatalogError::Config(
                "Database connection timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
