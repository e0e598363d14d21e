//! Main catalog service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main catalog service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CatalogConfig {
    /// Build a configuration from environment variables
    ///
    /// Recognizes `DATABASE_URL`, `CATALOG_HOST` and `CATALOG_PORT`; anything
    /// unset falls back to the defaults.
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Ok(host) = std::env::var("CATALOG_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("CATALOG_PORT") {
            config.server.port = port.parse().map_err(|_| {
                crate::utils::error::CatalogError::Config(format!(
                    "CATALOG_PORT is not a valid port number: {}",
                    port
                ))
            })?;
        }

        Ok(config)
    }
}
