//! Product domain model and record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// System-assigned identifier
    pub id: i32,
    /// Stock-keeping unit, unique across all products
    pub sku: String,
    /// Product name
    pub product_name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A validated record for the create pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Stock-keeping unit
    pub sku: String,
    /// Product name
    pub product_name: String,
    /// Optional description
    pub description: Option<String>,
}

/// A validated partial update for the update pipeline
///
/// An absent field means "leave unchanged", never "clear the field".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPatch {
    /// Stock-keeping unit identifying the product to update
    pub sku: String,
    /// New product name, if supplied
    pub product_name: Option<String>,
    /// New description, if supplied
    pub description: Option<String>,
}
