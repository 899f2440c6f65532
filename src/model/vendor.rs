//! Vendor DTOs and operation parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VendorDto {
    pub fn from_entity(entity: entity::vendor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Request body for `POST /api/vendors`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendorDto {
    pub name: String,
    pub description: Option<String>,
}
