use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260829_000001_create_user_table::Users, m20260829_000002_create_vendor_table::Vendors,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Carts::Table)
                    .if_not_exists()
                    // The cart id doubles as the owning customer's user id.
                    .col(uuid(Carts::Id).primary_key())
                    .col(decimal_len(Carts::TotalPrice, 16, 2))
                    .col(integer(Carts::Quantity))
                    .col(uuid_null(Carts::VendorId))
                    .col(
                        timestamp(Carts::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Carts::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_customer_id")
                            .from(Carts::Table, Carts::Id)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_vendor_id")
                            .from(Carts::Table, Carts::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Carts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Carts {
    Table,
    Id,
    TotalPrice,
    Quantity,
    VendorId,
    CreatedAt,
    UpdatedAt,
}
