//! Product endpoints
//!
//! Bulk create, bulk partial update, and listing of product records.

use crate::core::models::Product;
use crate::server::AppState;
use crate::utils::error::CatalogError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

/// Configure product routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .route("/create", web::post().to(create_products))
            .route("/update", web::post().to(update_products))
            .route("", web::get().to(list_products)),
    );
}

/// Update response when at least one record matched
#[derive(Debug, Serialize)]
struct UpdateResponse {
    message: String,
    updated_skus: Vec<String>,
}

/// A product as rendered by the listing endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductView {
    id: i32,
    sku: String,
    product_name: String,
    description: Option<String>,
    created_at: String,
    updated_at: String,
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku.clone(),
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            created_at: product.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: product.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Bulk product creation endpoint
///
/// Accepts a single record object or an array of records; the whole batch is
/// persisted atomically or not at all.
async fn create_products(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    info!("Bulk product create request ({} bytes)", body.len());

    match state.ingest.create_products(&body).await {
        Ok(_) => Ok(HttpResponse::Ok().body("Successfully created products.")),
        Err(err @ (CatalogError::InvalidPayload(_) | CatalogError::Validation(_))) => {
            warn!("Rejected create batch: {}", err);
            Ok(HttpResponse::BadRequest().body(err.client_message()))
        }
        Err(err @ CatalogError::DuplicateSku(_)) => {
            warn!("Create batch rolled back: {}", err);
            Ok(HttpResponse::Conflict().body(err.to_string()))
        }
        Err(err) => {
            error!("Product creation failed: {}", err);
            Ok(HttpResponse::InternalServerError().body(format!("Error: {}", err)))
        }
    }
}

/// Bulk partial update endpoint
///
/// Records are matched by SKU; unmatched SKUs are skipped. The response
/// distinguishes "some updates applied" from "no updates applied", both 200.
async fn update_products(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    info!("Bulk product update request ({} bytes)", body.len());

    match state.ingest.update_products(&body).await {
        Ok(outcome) if outcome.any_updated() => Ok(HttpResponse::Ok().json(UpdateResponse {
            message: "Some products were updated successfully.".to_string(),
            updated_skus: outcome.updated_skus,
        })),
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "message": "No products were updated."
        }))),
        Err(err) => {
            warn!("Rejected update batch: {}", err);
            Ok(HttpResponse::BadRequest().json(json!({
                "error": err.client_message()
            })))
        }
    }
}

/// Listing endpoint returning every product
async fn list_products(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.ingest.list_products().await {
        Ok(products) => {
            let views: Vec<ProductView> = products.iter().map(ProductView::from).collect();
            Ok(HttpResponse::Ok().json(views))
        }
        Err(err) => {
            error!("Failed to fetch products: {}", err);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "An error occurred while fetching products."
            })))
        }
    }
}
