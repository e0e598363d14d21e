use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Product ID (auto-increment)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Stock-keeping unit (unique)
    #[sea_orm(unique)]
    pub sku: String,

    /// Product name
    pub product_name: String,

    /// Description (optional)
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Product entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain product model
    pub fn to_domain_product(&self) -> crate::core::models::Product {
        crate::core::models::Product {
            id: self.id,
            sku: self.sku.clone(),
            product_name: self.product_name.clone(),
            description: self.description.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Build an active model for a new product, timestamps set to now
    pub fn from_new_product(product: &crate::core::models::NewProduct) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            sku: Set(product.sku.clone()),
            product_name: Set(product.product_name.clone()),
            description: Set(product.description.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
    }
}
