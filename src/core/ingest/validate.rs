//! Per-operation batch validation
//!
//! Validation is all-or-nothing across a batch: the first invalid record
//! rejects the entire request before anything is persisted.

use crate::core::models::{NewProduct, ProductPatch};
use crate::utils::error::{CatalogError, Result};

use super::payload::ProductRecord;

/// Error message when a create record is missing a required field
pub const MISSING_CREATE_FIELDS: &str =
    "Invalid JSON data format. Each record must have sku and product_name.";

/// Error message when an update record is missing its SKU
pub const MISSING_UPDATE_SKU: &str = "Invalid JSON data format. Each record must have sku.";

/// Error message when an update record carries no updatable field
pub const MISSING_UPDATE_FIELDS: &str =
    "Invalid JSON data format. Each record must have at least product_name or description.";

/// Validate a batch for the create pipeline
///
/// Every record must carry a non-empty `sku` and a non-empty `product_name`.
pub fn validate_create(records: &[ProductRecord]) -> Result<Vec<NewProduct>> {
    records
        .iter()
        .map(|record| {
            let sku = non_empty(&record.sku)
                .ok_or_else(|| CatalogError::validation(MISSING_CREATE_FIELDS))?;
            let product_name = non_empty(&record.product_name)
                .ok_or_else(|| CatalogError::validation(MISSING_CREATE_FIELDS))?;

            Ok(NewProduct {
                sku: sku.to_string(),
                product_name: product_name.to_string(),
                description: record.description.clone(),
            })
        })
        .collect()
}

/// Validate a batch for the update pipeline
///
/// Every record must carry a non-empty `sku` and at least one of
/// `product_name` / `description`.
pub fn validate_update(records: &[ProductRecord]) -> Result<Vec<ProductPatch>> {
    records
        .iter()
        .map(|record| {
            let sku = non_empty(&record.sku)
                .ok_or_else(|| CatalogError::validation(MISSING_UPDATE_SKU))?;

            if record.product_name.is_none() && record.description.is_none() {
                return Err(CatalogError::validation(MISSING_UPDATE_FIELDS));
            }

            Ok(ProductPatch {
                sku: sku.to_string(),
                product_name: record.product_name.clone(),
                description: record.description.clone(),
            })
        })
        .collect()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
