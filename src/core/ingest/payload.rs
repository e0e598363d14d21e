//! Request payload normalization
//!
//! A request body may carry a single record object or an array of record
//! objects. Both shapes are resolved here, once, into a canonical ordered
//! sequence before validation runs.

use crate::utils::error::{CatalogError, Result};
use serde::Deserialize;

/// Error message for undecodable or wrongly-shaped payloads
pub const INVALID_PAYLOAD: &str = "Invalid JSON payload.";

/// A product record as submitted by the client, before validation
///
/// Unknown fields are ignored; required-field checks happen in the
/// per-operation validators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    /// Stock-keeping unit
    #[serde(default)]
    pub sku: Option<String>,
    /// Product name
    #[serde(default)]
    pub product_name: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// The two accepted payload shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordPayload {
    Many(Vec<ProductRecord>),
    One(ProductRecord),
}

/// Parse a raw request body into a canonical sequence of records
///
/// Fails with [`CatalogError::InvalidPayload`] when the body is not decodable
/// JSON, or when the decoded value is neither a record object nor an array of
/// record objects.
pub fn parse_records(body: &[u8]) -> Result<Vec<ProductRecord>> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| CatalogError::invalid_payload(INVALID_PAYLOAD))?;

    normalize(value)
}

/// Coerce a decoded JSON value into an ordered sequence of records
pub fn normalize(value: serde_json::Value) -> Result<Vec<ProductRecord>> {
    let payload: RecordPayload = serde_json::from_value(value)
        .map_err(|_| CatalogError::invalid_payload(INVALID_PAYLOAD))?;

    Ok(match payload {
        RecordPayload::Many(records) => records,
        RecordPayload::One(record) => vec![record],
    })
}
