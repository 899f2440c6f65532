use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

/// Durable order created by checkout. Immutable after creation except for
/// `status`, which moves through the transitions allowed by
/// [`OrderStatus::can_transition_to`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub total_order_cost: Decimal,
    pub vendor_id: Uuid,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Order fulfillment status.
///
/// Stored as a lowercase string column. New orders always start as
/// `Preparing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "preparing")]
    Preparing,
    #[sea_orm(string_value = "ready")]
    Ready,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// Returns whether a staff status update from `self` to `next` is legal.
    ///
    /// Allowed transitions:
    /// - `Preparing` -> `Ready` or `Cancelled`
    /// - `Ready` -> `Delivered` or `Cancelled`
    ///
    /// `Delivered` and `Cancelled` are terminal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Preparing, OrderStatus::Ready)
                | (OrderStatus::Preparing, OrderStatus::Cancelled)
                | (OrderStatus::Ready, OrderStatus::Delivered)
                | (OrderStatus::Ready, OrderStatus::Cancelled)
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CustomerId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
