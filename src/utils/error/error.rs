//! Error handling for the catalog service
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the catalog service
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for the catalog service
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body is not decodable JSON or has the wrong shape
    #[error("{0}")]
    InvalidPayload(String),

    /// Validation errors
    #[error("{0}")]
    Validation(String),

    /// A record's SKU collides with an existing product
    #[error("A product with the SKU already exists: {0}")]
    DuplicateSku(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for CatalogError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            CatalogError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            CatalogError::Database(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            CatalogError::InvalidPayload(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_PAYLOAD",
                self.to_string(),
            ),
            CatalogError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            CatalogError::DuplicateSku(_) => (
                actix_web::http::StatusCode::CONFLICT,
                "DUPLICATE_SKU",
                self.to_string(),
            ),
            CatalogError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl CatalogError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_payload<S: Into<String>>(message: S) -> Self {
        Self::InvalidPayload(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Message suitable for a client-facing error body
    ///
    /// Payload and validation errors carry their message verbatim; everything
    /// else goes through Display.
    pub fn client_message(&self) -> String {
        match self {
            CatalogError::InvalidPayload(msg) | CatalogError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
