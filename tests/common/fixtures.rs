//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use catalog_rs::core::models::NewProduct;
use serde_json::json;

/// Factory for creating test products and request bodies
pub struct ProductFactory;

impl ProductFactory {
    /// Create a basic product record
    pub fn new_product(sku: &str, product_name: &str) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            product_name: product_name.to_string(),
            description: None,
        }
    }

    /// Create a product record with a description
    pub fn with_description(sku: &str, product_name: &str, description: &str) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            product_name: product_name.to_string(),
            description: Some(description.to_string()),
        }
    }

    /// JSON body for a single-record create request
    pub fn create_body(sku: &str, product_name: &str) -> String {
        json!({ "sku": sku, "product_name": product_name }).to_string()
    }

    /// JSON body for a multi-record create request
    pub fn create_batch_body(records: &[(&str, &str)]) -> String {
        let records: Vec<_> = records
            .iter()
            .map(|(sku, product_name)| json!({ "sku": sku, "product_name": product_name }))
            .collect();
        serde_json::Value::Array(records).to_string()
    }
}
