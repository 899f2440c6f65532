use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::model::vendor::CreateVendorDto;

pub struct VendorRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> VendorRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, vendor_id: Uuid) -> Result<Option<entity::vendor::Model>, DbErr> {
        entity::prelude::Vendor::find_by_id(vendor_id)
            .one(self.conn)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::vendor::Model>, DbErr> {
        entity::prelude::Vendor::find()
            .order_by_asc(entity::vendor::Column::Name)
            .all(self.conn)
            .await
    }

    pub async fn create(&self, dto: CreateVendorDto) -> Result<entity::vendor::Model, DbErr> {
        let now = Utc::now();
        entity::vendor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.conn)
        .await
    }
}
