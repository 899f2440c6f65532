//! Cart DTOs and operation parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cart line as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineDto {
    pub item_id: Uuid,
    pub quantity: i32,
}

impl CartLineDto {
    pub fn from_entity(entity: entity::cart_item::Model) -> Self {
        Self {
            item_id: entity.item_id,
            quantity: entity.quantity,
        }
    }
}

/// Cart aggregate plus its current lines.
///
/// `vendor_id` is `None` whenever the cart is empty (between orders, after an
/// explicit empty, or after checkout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDto {
    pub id: Uuid,
    pub total_price: Decimal,
    pub quantity: i32,
    pub vendor_id: Option<Uuid>,
    pub items: Vec<CartLineDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartDto {
    pub fn from_entity(cart: entity::cart::Model, lines: Vec<entity::cart_item::Model>) -> Self {
        Self {
            id: cart.id,
            total_price: cart.total_price,
            quantity: cart.quantity,
            vendor_id: cart.vendor_id,
            items: lines.into_iter().map(CartLineDto::from_entity).collect(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

/// Request body for `POST /api/cart`.
///
/// The quantity overwrites any existing line for the item; it is not additive.
/// A quantity of zero removes the line.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCartLineDto {
    pub item_id: Uuid,
    pub quantity: i32,
}
