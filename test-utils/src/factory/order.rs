//! Order factory for creating test order entities.

use chrono::Utc;
use entity::order::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test orders with customizable fields.
///
/// Defaults to status `Preparing` and a zero total; customer and vendor are
/// required dependencies.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    customer_id: Uuid,
    vendor_id: Uuid,
    total_order_cost: Decimal,
    status: OrderStatus,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_id: Uuid, vendor_id: Uuid) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            customer_id,
            vendor_id,
            total_order_cost: Decimal::ZERO,
            status: OrderStatus::Preparing,
        }
    }

    pub fn total(mut self, total_order_cost: Decimal) -> Self {
        self.total_order_cost = total_order_cost;
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            id: ActiveValue::Set(self.id),
            total_order_cost: ActiveValue::Set(self.total_order_cost),
            vendor_id: ActiveValue::Set(self.vendor_id),
            customer_id: ActiveValue::Set(self.customer_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given customer and vendor.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: Uuid,
    vendor_id: Uuid,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_id, vendor_id).build().await
}
