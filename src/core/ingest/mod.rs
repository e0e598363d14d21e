//! Product ingestion pipelines
//!
//! Payload normalization, per-operation validation, and the service object
//! driving create, update, and list operations.

pub mod payload;
pub mod service;
pub mod validate;

pub use payload::{parse_records, ProductRecord};
pub use service::{IngestService, UpdateOutcome};
pub use validate::{validate_create, validate_update};
