use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260829_000003_create_item_table::Items, m20260829_000004_create_cart_table::Carts,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(uuid(CartItems::CartId))
                    .col(uuid(CartItems::ItemId))
                    .col(integer(CartItems::Quantity))
                    .primary_key(
                        Index::create()
                            .col(CartItems::CartId)
                            .col(CartItems::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_cart_id")
                            .from(CartItems::Table, CartItems::CartId)
                            .to(Carts::Table, Carts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_item_id")
                            .from(CartItems::Table, CartItems::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItems {
    Table,
    CartId,
    ItemId,
    Quantity,
}
