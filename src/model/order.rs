//! Order DTOs and operation parameters.

use chrono::{DateTime, Utc};
use entity::order::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order line with the price frozen at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineDto {
    pub item_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderLineDto {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            item_id: entity.item_id,
            quantity: entity.quantity,
            price: entity.price,
        }
    }
}

/// Order as returned to the client, with its lines attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: Uuid,
    pub total_order_cost: Decimal,
    pub vendor_id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub items: Vec<OrderLineDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderDto {
    pub fn from_entity(
        order: entity::order::Model,
        lines: Vec<entity::order_item::Model>,
    ) -> Self {
        Self {
            id: order.id,
            total_order_cost: order.total_order_cost,
            vendor_id: order.vendor_id,
            customer_id: order.customer_id,
            status: order.status.to_value(),
            items: lines.into_iter().map(OrderLineDto::from_entity).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Request body for `PUT /api/orders/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub status: String,
}

/// Parses a client-supplied status string into an [`OrderStatus`].
///
/// # Returns
/// - `Some(OrderStatus)` - Recognized status value
/// - `None` - Unknown status string; callers map this to a 400
pub fn parse_order_status(value: &str) -> Option<OrderStatus> {
    OrderStatus::try_from_value(&value.to_string()).ok()
}
