//! Database integration tests
//!
//! Tests product storage operations using a real in-memory SQLite database.

use crate::common::database::{TestDatabase, create_test_storage};
use crate::common::fixtures::ProductFactory;
use catalog_rs::core::models::ProductPatch;
use catalog_rs::storage::database::DatabaseBackendType;
use catalog_rs::utils::error::CatalogError;

/// Test basic database connection, migration, and health check
#[tokio::test]
async fn test_database_health_check() {
    let db = TestDatabase::new().await;

    assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

    let health = db.db().health_check().await;
    assert!(health.is_ok(), "Health check failed: {:?}", health.err());
}

/// The storage layer delegates its health check to the database backend
#[tokio::test]
async fn test_storage_layer_health_check() {
    let storage = create_test_storage().await;
    assert!(storage.health_check().await.is_ok());
}

/// Test that migrations can run twice without error
#[tokio::test]
async fn test_database_migration_is_idempotent() {
    let db = TestDatabase::new().await;
    let result = db.db().migrate().await;
    assert!(result.is_ok(), "Migration failed: {:?}", result.err());
}

/// Inserted products come back from the listing with assigned identifiers
/// and timestamps
#[tokio::test]
async fn test_insert_and_list_products() {
    let db = TestDatabase::new().await;

    let products = vec![
        ProductFactory::new_product("A1", "Widget"),
        ProductFactory::with_description("B2", "Gadget", "A gadget"),
    ];
    db.db().insert_products(&products).await.unwrap();

    let listed = db.db().list_products().await.unwrap();
    assert_eq!(listed.len(), 2);

    let widget = listed.iter().find(|p| p.sku == "A1").unwrap();
    assert_eq!(widget.product_name, "Widget");
    assert_eq!(widget.description, None);
    assert!(widget.id > 0);
    assert_eq!(widget.created_at, widget.updated_at);

    let gadget = listed.iter().find(|p| p.sku == "B2").unwrap();
    assert_eq!(gadget.description.as_deref(), Some("A gadget"));
    assert_ne!(widget.id, gadget.id);
}

/// A duplicate SKU anywhere in the batch rolls back the whole batch
#[tokio::test]
async fn test_duplicate_sku_rolls_back_whole_batch() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_products(&[ProductFactory::new_product("A1", "Widget")])
        .await
        .unwrap();

    let batch = vec![
        ProductFactory::new_product("B1", "First"),
        ProductFactory::new_product("A1", "Duplicate"),
        ProductFactory::new_product("C1", "Last"),
    ];
    let err = db.db().insert_products(&batch).await.unwrap_err();

    match err {
        CatalogError::DuplicateSku(sku) => assert_eq!(sku, "A1"),
        other => panic!("Expected DuplicateSku, got {:?}", other),
    }

    // None of the batch survived, including the record staged before the
    // conflict
    let listed = db.db().list_products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].sku, "A1");
    assert_eq!(listed[0].product_name, "Widget");
}

/// Find by SKU returns None for unknown SKUs and the product otherwise
#[tokio::test]
async fn test_find_product_by_sku() {
    let db = TestDatabase::new().await;

    let missing = db.db().find_product_by_sku("ZZZ").await.unwrap();
    assert!(missing.is_none());

    db.db()
        .insert_products(&[ProductFactory::new_product("A1", "Widget")])
        .await
        .unwrap();

    let found = db.db().find_product_by_sku("A1").await.unwrap().unwrap();
    assert_eq!(found.product_name, "Widget");
}

/// Unmatched SKUs are skipped: no error, no new record, not reported as
/// updated
#[tokio::test]
async fn test_update_skips_unmatched_skus() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_products(&[ProductFactory::new_product("A1", "Widget")])
        .await
        .unwrap();

    let patches = vec![
        ProductPatch {
            sku: "A1".to_string(),
            product_name: Some("Widget v2".to_string()),
            description: None,
        },
        ProductPatch {
            sku: "ZZZ".to_string(),
            product_name: Some("Ghost".to_string()),
            description: None,
        },
    ];

    let updated = db.db().apply_product_updates(&patches).await.unwrap();
    assert_eq!(updated, vec!["A1".to_string()]);

    let listed = db.db().list_products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product_name, "Widget v2");
}

/// A description-only patch leaves the product name unchanged
#[tokio::test]
async fn test_description_only_update_preserves_name() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_products(&[ProductFactory::with_description("A1", "Widget", "old desc")])
        .await
        .unwrap();

    let patches = vec![ProductPatch {
        sku: "A1".to_string(),
        product_name: None,
        description: Some("new desc".to_string()),
    }];
    db.db().apply_product_updates(&patches).await.unwrap();

    let product = db.db().find_product_by_sku("A1").await.unwrap().unwrap();
    assert_eq!(product.product_name, "Widget");
    assert_eq!(product.description.as_deref(), Some("new desc"));
    assert!(product.updated_at >= product.created_at);
}

/// The update batch runs in a single transaction committed at the end; every
/// matched record in the batch is applied together
#[tokio::test]
async fn test_update_batch_applies_all_records_in_one_transaction() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_products(&[
            ProductFactory::new_product("A1", "Widget"),
            ProductFactory::new_product("B2", "Gadget"),
            ProductFactory::new_product("C3", "Gizmo"),
        ])
        .await
        .unwrap();

    let patches: Vec<ProductPatch> = ["A1", "B2", "C3"]
        .iter()
        .map(|sku| ProductPatch {
            sku: sku.to_string(),
            product_name: Some(format!("{} updated", sku)),
            description: None,
        })
        .collect();

    let updated = db.db().apply_product_updates(&patches).await.unwrap();
    assert_eq!(updated, vec!["A1", "B2", "C3"]);

    let listed = db.db().list_products().await.unwrap();
    for product in &listed {
        assert!(product.product_name.ends_with("updated"));
    }
}

/// Listing twice with no intervening writes returns identical results
#[tokio::test]
async fn test_listing_is_stable_without_writes() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_products(&[
            ProductFactory::new_product("A1", "Widget"),
            ProductFactory::new_product("B2", "Gadget"),
        ])
        .await
        .unwrap();

    let first = db.db().list_products().await.unwrap();
    let second = db.db().list_products().await.unwrap();
    assert_eq!(first, second);
}
