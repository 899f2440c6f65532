pub use sea_orm_migration::prelude::*;

mod m20260829_000001_create_user_table;
mod m20260829_000002_create_vendor_table;
mod m20260829_000003_create_item_table;
mod m20260829_000004_create_cart_table;
mod m20260829_000005_create_cart_item_table;
mod m20260829_000006_create_order_table;
mod m20260829_000007_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_user_table::Migration),
            Box::new(m20260829_000002_create_vendor_table::Migration),
            Box::new(m20260829_000003_create_item_table::Migration),
            Box::new(m20260829_000004_create_cart_table::Migration),
            Box::new(m20260829_000005_create_cart_item_table::Migration),
            Box::new(m20260829_000006_create_order_table::Migration),
            Box::new(m20260829_000007_create_order_item_table::Migration),
        ]
    }
}
