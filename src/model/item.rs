//! Catalog item DTOs and operation parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemDto {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            vendor_id: entity.vendor_id,
            name: entity.name,
            price: entity.price,
            img: entity.img,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Request body for `POST /api/items`. Image handling is limited to an
/// optional pre-existing path; uploads are out of scope.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemDto {
    pub vendor_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub img: Option<String>,
}

/// Parameters for creating a catalog item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub vendor_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub img: Option<String>,
}
