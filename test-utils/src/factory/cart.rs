//! Cart and cart line factories.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test carts with customizable fields.
///
/// The cart id is the owning customer's user id; create the user first.
/// Totals default to zero with no vendor bound, matching a freshly created
/// cart.
pub struct CartFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: Uuid,
    total_price: Decimal,
    quantity: i32,
    vendor_id: Option<Uuid>,
}

impl<'a> CartFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_id: Uuid) -> Self {
        Self {
            db,
            customer_id,
            total_price: Decimal::ZERO,
            quantity: 0,
            vendor_id: None,
        }
    }

    pub fn vendor(mut self, vendor_id: Uuid) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    pub fn totals(mut self, total_price: Decimal, quantity: i32) -> Self {
        self.total_price = total_price;
        self.quantity = quantity;
        self
    }

    /// Builds and inserts the cart entity into the database.
    pub async fn build(self) -> Result<entity::cart::Model, DbErr> {
        let now = Utc::now();
        entity::cart::ActiveModel {
            id: ActiveValue::Set(self.customer_id),
            total_price: ActiveValue::Set(self.total_price),
            quantity: ActiveValue::Set(self.quantity),
            vendor_id: ActiveValue::Set(self.vendor_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty cart for the customer, bound to the given vendor.
pub async fn create_cart(
    db: &DatabaseConnection,
    customer_id: Uuid,
    vendor_id: Uuid,
) -> Result<entity::cart::Model, DbErr> {
    CartFactory::new(db, customer_id).vendor(vendor_id).build().await
}
