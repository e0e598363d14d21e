//! Ingestion service
//!
//! Drives the three pipeline operations end to end: payload parsing,
//! validation, and the storage calls.

use crate::core::models::Product;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

use super::payload;
use super::validate;

/// Outcome of an update batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// SKUs that matched an existing product and were updated, in batch order
    pub updated_skus: Vec<String>,
}

impl UpdateOutcome {
    /// Whether any record in the batch matched an existing product
    pub fn any_updated(&self) -> bool {
        !self.updated_skus.is_empty()
    }
}

/// Service driving the product ingestion pipelines
#[derive(Debug, Clone)]
pub struct IngestService {
    storage: Arc<StorageLayer>,
}

impl IngestService {
    /// Create a new ingestion service on top of a storage layer
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Create pipeline: parse, validate, insert the whole batch atomically
    ///
    /// Returns the number of created products.
    pub async fn create_products(&self, body: &[u8]) -> Result<usize> {
        let records = payload::parse_records(body)?;
        let products = validate::validate_create(&records)?;
        debug!("Create batch validated: {} records", products.len());

        self.storage.database.insert_products(&products).await?;

        info!("Created {} products", products.len());
        Ok(products.len())
    }

    /// Update pipeline: parse, validate, apply partial updates by SKU
    ///
    /// Unmatched SKUs are skipped; the outcome lists the SKUs that were
    /// actually updated.
    pub async fn update_products(&self, body: &[u8]) -> Result<UpdateOutcome> {
        let records = payload::parse_records(body)?;
        let patches = validate::validate_update(&records)?;
        debug!("Update batch validated: {} records", patches.len());

        let updated_skus = self.storage.database.apply_product_updates(&patches).await?;

        info!(
            "Updated {} of {} products",
            updated_skus.len(),
            patches.len()
        );
        Ok(UpdateOutcome { updated_skus })
    }

    /// Return every product in the catalog
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.storage.database.list_products().await
    }
}
