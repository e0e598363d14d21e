//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{CatalogError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| CatalogError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting product catalog service");

    dotenvy::dotenv().ok();

    // Auto-load configuration file
    let config_path = "config/catalog.yaml";
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "Configuration file loading failed ({}), falling back to environment",
                e
            );
            Config::from_env()?
        }
    };

    // Create and start server
    let server = HttpServer::new(&config).await?;
    info!("Server starting at: http://{}", config.server().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/products/create - Bulk product creation");
    info!("   POST /api/products/update - Bulk partial update");
    info!("   GET  /api/products - List all products");

    server.start().await
}
