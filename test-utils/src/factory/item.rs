//! Catalog item factory for creating test item entities.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test catalog items with customizable fields.
///
/// The owning vendor is a required dependency; use
/// `factory::vendor::create_vendor` first.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    vendor_id: Uuid,
    name: String,
    price: Decimal,
    img: Option<String>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Item {n}"`
    /// - price: `9.99`
    /// - img: `None`
    pub fn new(db: &'a DatabaseConnection, vendor_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            vendor_id,
            name: format!("Item {}", n),
            price: Decimal::new(999, 2),
            img: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    /// Builds and inserts the item entity into the database.
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        let now = Utc::now();
        entity::item::ActiveModel {
            id: ActiveValue::Set(self.id),
            vendor_id: ActiveValue::Set(self.vendor_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            img: ActiveValue::Set(self.img),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item with default values for the given vendor.
pub async fn create_item(
    db: &DatabaseConnection,
    vendor_id: Uuid,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, vendor_id).build().await
}

/// Creates an item with a specific price for the given vendor.
pub async fn create_item_with_price(
    db: &DatabaseConnection,
    vendor_id: Uuid,
    price: Decimal,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, vendor_id).price(price).build().await
}
