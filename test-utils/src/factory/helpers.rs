//! Shared helper utilities for factory methods.

use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-unique id for generating distinct default field values.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

/// Creates a customer, a vendor, and one catalog item per price string.
///
/// Price strings must parse as decimals ("10.00", "5.75"); this keeps test
/// call sites readable without pulling macro dependencies into every test.
///
/// # Returns
/// - `Ok((user, vendor, items))` - Created entities, items in input order
/// - `Err(DbErr)` - Database error during any insert
pub async fn create_catalog(
    db: &DatabaseConnection,
    prices: &[&str],
) -> Result<
    (
        entity::user::Model,
        entity::vendor::Model,
        Vec<entity::item::Model>,
    ),
    DbErr,
> {
    let user = factory::user::create_user(db).await?;
    let vendor = factory::vendor::create_vendor(db).await?;

    let mut items = Vec::with_capacity(prices.len());
    for price in prices {
        let price = Decimal::from_str(price)
            .map_err(|e| DbErr::Custom(format!("bad price literal '{}': {}", price, e)))?;
        items.push(factory::item::create_item_with_price(db, vendor.id, price).await?);
    }

    Ok((user, vendor, items))
}
