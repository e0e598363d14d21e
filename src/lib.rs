//! # Catalog-RS
//!
//! A product catalog REST service: bulk product ingestion, partial updates,
//! and listing, backed by a relational datastore through SeaORM.
//!
//! ## Endpoints
//!
//! - `POST /api/products/create` — bulk create; a single record object or an
//!   array of records, persisted atomically
//! - `POST /api/products/update` — bulk partial update matched by SKU;
//!   unmatched SKUs are skipped
//! - `GET /api/products` — list every product
//! - `GET /health` — health check
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog_rs::{Catalog, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/catalog.yaml").await?;
//!     let catalog = Catalog::new(config).await?;
//!     catalog.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::ingest::{IngestService, UpdateOutcome};
pub use crate::core::models::{NewProduct, Product, ProductPatch};
pub use utils::error::{CatalogError, Result};

use tracing::info;

/// A minimal catalog service implementation
pub struct Catalog {
    server: server::server::HttpServer,
}

impl Catalog {
    /// Create a new catalog service instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new catalog service instance");

        // Create HTTP server
        let server = server::server::HttpServer::new(&config).await?;

        Ok(Self { server })
    }

    /// Run the catalog service
    pub async fn run(self) -> Result<()> {
        info!("Starting catalog service");

        // Start HTTP server
        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information for the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
