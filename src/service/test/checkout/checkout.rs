use super::*;

use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};

/// Tests the happy path end to end: a two-line cart becomes an order with
/// frozen line prices, a recomputed total, and status `preparing`, while the
/// cart is cleared and unbound from its vendor.
#[tokio::test]
async fn converts_cart_into_order_and_resets_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00", "5.00"]).await?;

    let carts = CartService::new(db);
    carts.upsert_line(user.id, items[0].id, 2).await.unwrap();
    carts.upsert_line(user.id, items[1].id, 1).await.unwrap();

    let order = CheckoutService::new(db).checkout(user.id).await.unwrap();

    assert_eq!(order.customer_id, user.id);
    assert_eq!(order.vendor_id, vendor.id);
    assert_eq!(order.total_order_cost, dec!(25.00));
    assert_eq!(order.status, "preparing");

    let mut lines = order.items.clone();
    lines.sort_by_key(|line| line.quantity);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].item_id, items[1].id);
    assert_eq!(lines[0].quantity, 1);
    assert_eq!(lines[0].price, dec!(5.00));
    assert_eq!(lines[1].item_id, items[0].id);
    assert_eq!(lines[1].quantity, 2);
    assert_eq!(lines[1].price, dec!(10.00));

    let cart = carts.get_cart(user.id).await.unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.total_price, Decimal::ZERO);
    assert_eq!(cart.quantity, 0);
    assert_eq!(cart.vendor_id, None);

    Ok(())
}

/// Tests that an empty cart refuses checkout with a conflict and that the
/// refusal creates no order rows.
#[tokio::test]
async fn empty_cart_is_a_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, _items) = factory::helpers::create_catalog(db, &["10.00"]).await?;
    factory::create_cart(db, user.id, vendor.id).await?;

    let result = CheckoutService::new(db).checkout(user.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(entity::order::Entity::find().all(db).await?.is_empty());
    assert!(entity::order_item::Entity::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests the NotFound mapping when the customer never had a cart.
#[tokio::test]
async fn missing_cart_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CheckoutService::new(db).checkout(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a catalog price change after the last cart recalculation is
/// picked up by checkout: the order total always equals the sum of the
/// frozen line prices, never the stale cart aggregate.
#[tokio::test]
async fn total_matches_frozen_prices_after_price_change() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let carts = CartService::new(db);
    let stale = carts.upsert_line(user.id, items[0].id, 2).await.unwrap();
    assert_eq!(stale.total_price, dec!(20.00));

    let mut item = items[0].clone().into_active_model();
    item.price = Set(dec!(12.50));
    item.update(db).await?;

    let order = CheckoutService::new(db).checkout(user.id).await.unwrap();

    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].price, dec!(12.50));
    assert_eq!(order.total_order_cost, dec!(25.00));

    Ok(())
}

/// Tests the corrupt-aggregate edge: a cart whose stored quantity claims
/// lines that do not exist is refused rather than turned into an empty
/// order.
#[tokio::test]
async fn aggregate_without_lines_is_a_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, _items) = factory::helpers::create_catalog(db, &["10.00"]).await?;
    let cart = factory::create_cart(db, user.id, vendor.id).await?;

    let mut cart = cart.into_active_model();
    cart.total_price = Set(dec!(10.00));
    cart.quantity = Set(1);
    cart.update(db).await?;

    let result = CheckoutService::new(db).checkout(user.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(entity::order::Entity::find().all(db).await?.is_empty());

    Ok(())
}
