use chrono::Utc;
use entity::order::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::data::cart::PricedLine;

/// Parameters for creating an order at checkout.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub total_order_cost: Decimal,
}

/// Repository for orders and their lines. Orders are created once at checkout
/// and never deleted; only `status` changes afterwards.
pub struct OrderRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new order plus one line per cart line, freezing each line's
    /// catalog price.
    ///
    /// The checkout orchestrator calls this inside its transaction; the
    /// `lines` slice comes from the same consistent read that produced
    /// `total_order_cost`, so the stated total always equals the sum of
    /// `quantity * price` over the created lines.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created order with status `Preparing`
    /// - `Err(DbErr)`: Database error; the caller's transaction rolls back
    pub async fn create_with_lines(
        &self,
        params: CreateOrderParams,
        lines: &[PricedLine],
    ) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        let order = entity::order::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            total_order_cost: ActiveValue::Set(params.total_order_cost),
            vendor_id: ActiveValue::Set(params.vendor_id),
            customer_id: ActiveValue::Set(params.customer_id),
            status: ActiveValue::Set(OrderStatus::Preparing),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.conn)
        .await?;

        for line in lines {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                item_id: ActiveValue::Set(line.item_id),
                quantity: ActiveValue::Set(line.quantity),
                price: ActiveValue::Set(line.price),
            }
            .insert(self.conn)
            .await?;
        }

        Ok(order)
    }

    pub async fn get_by_id(&self, order_id: Uuid) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .one(self.conn)
            .await
    }

    /// Gets an order together with its lines.
    ///
    /// # Returns
    /// - `Ok(Some((order, lines)))`: Order and its lines
    /// - `Ok(None)`: Order not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_lines(
        &self,
        order_id: Uuid,
    ) -> Result<Option<(entity::order::Model, Vec<entity::order_item::Model>)>, DbErr> {
        let order = self.get_by_id(order_id).await?;

        if let Some(order) = order {
            let lines = entity::prelude::OrderItem::find()
                .filter(entity::order_item::Column::OrderId.eq(order.id))
                .all(self.conn)
                .await?;

            Ok(Some((order, lines)))
        } else {
            Ok(None)
        }
    }

    /// Lists a customer's orders, newest first.
    pub async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.conn)
            .await
    }

    /// Writes `to` only while the order still holds `from`.
    ///
    /// Transition legality is enforced by the service layer; the status guard
    /// here makes the write atomic, so two concurrent transitions from the
    /// same state cannot both commit.
    ///
    /// # Returns
    /// - `Ok(true)`: Status written
    /// - `Ok(false)`: Order missing, or its status changed since it was read
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(
        &self,
        order_id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(to))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(entity::order::Column::Status.eq(from))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
