use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::model::item::CreateItemParams;

/// Repository for catalog items. Read-only from the cart's perspective; the
/// write methods exist for vendor catalog management.
pub struct ItemRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Resolves an item by id. Callers map `None` to a NotFound error.
    pub async fn get_by_id(&self, item_id: Uuid) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.conn).await
    }

    /// Lists the whole catalog, newest first.
    pub async fn list(&self) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .order_by_desc(entity::item::Column::CreatedAt)
            .all(self.conn)
            .await
    }

    /// Lists one vendor's catalog, newest first.
    pub async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::VendorId.eq(vendor_id))
            .order_by_desc(entity::item::Column::CreatedAt)
            .all(self.conn)
            .await
    }

    pub async fn create(&self, params: CreateItemParams) -> Result<entity::item::Model, DbErr> {
        let now = Utc::now();
        entity::item::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            vendor_id: ActiveValue::Set(params.vendor_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            img: ActiveValue::Set(params.img),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.conn)
        .await
    }

    pub async fn delete(&self, item_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Item::delete_by_id(item_id)
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
