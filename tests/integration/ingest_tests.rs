//! Ingestion pipeline integration tests
//!
//! Drives the IngestService end to end over raw JSON bodies against a real
//! in-memory database.

use crate::common::database::create_test_storage;
use crate::common::fixtures::ProductFactory;
use catalog_rs::core::ingest::IngestService;
use catalog_rs::utils::error::CatalogError;
use std::sync::Arc;

async fn test_service() -> IngestService {
    let storage = create_test_storage().await;
    IngestService::new(Arc::new(storage))
}

/// A single object body and a single-element array body produce identical
/// outcomes
#[tokio::test]
async fn test_single_object_and_array_are_equivalent() {
    let service = test_service().await;

    let created = service
        .create_products(br#"{"sku":"A1","product_name":"Widget"}"#)
        .await
        .unwrap();
    assert_eq!(created, 1);

    let created = service
        .create_products(ProductFactory::create_batch_body(&[("B2", "Gadget")]).as_bytes())
        .await
        .unwrap();
    assert_eq!(created, 1);

    let products = service.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
}

/// An empty array is a valid batch that creates nothing
#[tokio::test]
async fn test_empty_batch_creates_nothing() {
    let service = test_service().await;

    let created = service.create_products(b"[]").await.unwrap();
    assert_eq!(created, 0);
    assert!(service.list_products().await.unwrap().is_empty());
}

/// Validation failures reject the batch before anything is persisted
#[tokio::test]
async fn test_invalid_record_aborts_whole_create_batch() {
    let service = test_service().await;

    let body = br#"[{"sku":"A1","product_name":"Widget"},{"product_name":"NoSku"}]"#;
    let err = service.create_products(body).await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));

    assert!(service.list_products().await.unwrap().is_empty());
}

/// Malformed bodies are rejected without touching storage
#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let service = test_service().await;

    let err = service.create_products(b"not json").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPayload(_)));

    let err = service.update_products(b"not json").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPayload(_)));
}

/// Update outcome distinguishes matched and unmatched batches
#[tokio::test]
async fn test_update_outcome_reports_matched_skus() {
    let service = test_service().await;

    service
        .create_products(br#"[{"sku":"A1","product_name":"Widget"}]"#)
        .await
        .unwrap();

    let outcome = service
        .update_products(br#"{"sku":"A1","description":"new desc"}"#)
        .await
        .unwrap();
    assert!(outcome.any_updated());
    assert_eq!(outcome.updated_skus, vec!["A1".to_string()]);

    let outcome = service
        .update_products(br#"{"sku":"ZZZ","product_name":"X"}"#)
        .await
        .unwrap();
    assert!(!outcome.any_updated());
    assert!(outcome.updated_skus.is_empty());

    // The unmatched SKU did not create a record
    assert_eq!(service.list_products().await.unwrap().len(), 1);
}

/// A duplicate SKU in a create batch surfaces as a conflict naming the SKU
#[tokio::test]
async fn test_duplicate_sku_is_reported_as_conflict() {
    let service = test_service().await;

    service
        .create_products(ProductFactory::create_body("A1", "Widget").as_bytes())
        .await
        .unwrap();

    let err = service
        .create_products(ProductFactory::create_body("A1", "Widget again").as_bytes())
        .await
        .unwrap_err();

    match err {
        CatalogError::DuplicateSku(sku) => assert_eq!(sku, "A1"),
        other => panic!("Expected DuplicateSku, got {:?}", other),
    }
}
