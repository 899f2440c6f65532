use sea_orm_migration::{prelude::*, schema::*};

use super::m20260829_000002_create_vendor_table::Vendors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(uuid(Items::Id).primary_key())
                    .col(uuid(Items::VendorId))
                    .col(string(Items::Name))
                    .col(decimal_len(Items::Price, 16, 2))
                    .col(string_null(Items::Img))
                    .col(
                        timestamp(Items::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Items::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_vendor_id")
                            .from(Items::Table, Items::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Items {
    Table,
    Id,
    VendorId,
    Name,
    Price,
    Img,
    CreatedAt,
    UpdatedAt,
}
