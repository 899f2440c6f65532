//! Vendor factory for creating test vendor entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test vendors with customizable fields.
pub struct VendorFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
    description: Option<String>,
}

impl<'a> VendorFactory<'a> {
    /// Creates a new VendorFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Vendor {n}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Vendor {}", n),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the vendor entity into the database.
    pub async fn build(self) -> Result<entity::vendor::Model, DbErr> {
        let now = Utc::now();
        entity::vendor::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vendor with default values.
pub async fn create_vendor(db: &DatabaseConnection) -> Result<entity::vendor::Model, DbErr> {
    VendorFactory::new(db).build().await
}
