use crate::core::models::{NewProduct, Product, ProductPatch};
use crate::utils::error::{CatalogError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, product};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a batch of new products atomically
    ///
    /// All records are staged inside one transaction and committed together.
    /// A unique-constraint violation rolls back the whole batch and reports
    /// the SKU of the record that collided.
    pub async fn insert_products(&self, products: &[NewProduct]) -> Result<()> {
        debug!("Inserting batch of {} products", products.len());

        let txn = self.db.begin().await.map_err(CatalogError::Database)?;

        for new_product in products {
            let active_model = product::Model::from_new_product(new_product);

            if let Err(err) = entities::Product::insert(active_model).exec(&txn).await {
                txn.rollback().await.ok();
                return Err(match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        CatalogError::DuplicateSku(new_product.sku.clone())
                    }
                    _ => CatalogError::Database(err),
                });
            }
        }

        txn.commit().await.map_err(CatalogError::Database)?;
        Ok(())
    }

    /// Find a product by its SKU
    pub async fn find_product_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        debug!("Finding product by SKU: {}", sku);

        let product_model = entities::Product::find()
            .filter(product::Column::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(product_model.map(|model| model.to_domain_product()))
    }

    /// Apply partial updates to existing products matched by SKU
    ///
    /// Unmatched SKUs are skipped without error. The whole batch runs in one
    /// transaction committed at the end; the returned SKUs are the records
    /// that matched, in batch order.
    pub async fn apply_product_updates(&self, patches: &[ProductPatch]) -> Result<Vec<String>> {
        debug!("Applying update batch of {} records", patches.len());

        let txn = self.db.begin().await.map_err(CatalogError::Database)?;
        let mut updated_skus = Vec::new();

        for patch in patches {
            let product_model = entities::Product::find()
                .filter(product::Column::Sku.eq(&patch.sku))
                .one(&txn)
                .await
                .map_err(CatalogError::Database)?;

            let Some(model) = product_model else {
                debug!("SKU not found, skipping: {}", patch.sku);
                continue;
            };

            let mut active_model: product::ActiveModel = model.into();
            if let Some(product_name) = &patch.product_name {
                active_model.product_name = Set(product_name.clone());
            }
            if let Some(description) = &patch.description {
                active_model.description = Set(Some(description.clone()));
            }
            active_model.updated_at = Set(chrono::Utc::now().into());

            active_model
                .update(&txn)
                .await
                .map_err(CatalogError::Database)?;

            updated_skus.push(patch.sku.clone());
        }

        txn.commit().await.map_err(CatalogError::Database)?;
        Ok(updated_skus)
    }

    /// Return every product in the catalog
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let product_models = entities::Product::find()
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(product_models
            .iter()
            .map(product::Model::to_domain_product)
            .collect())
    }
}
