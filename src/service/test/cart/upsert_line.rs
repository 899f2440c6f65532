use super::*;

/// Tests the full add-to-cart flow: lazy cart creation, vendor binding from
/// the catalog item, and aggregate recalculation before the call returns.
#[tokio::test]
async fn creates_cart_and_recalculates_on_first_add() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let service = CartService::new(db);
    let cart = service.upsert_line(user.id, items[0].id, 2).await.unwrap();

    assert_eq!(cart.id, user.id);
    assert_eq!(cart.vendor_id, Some(vendor.id));
    assert_eq!(cart.total_price, dec!(20.00));
    assert_eq!(cart.quantity, 2);
    assert_eq!(cart.items.len(), 1);

    Ok(())
}

/// Tests that a negative quantity is rejected before any persistence.
///
/// Expected: BadRequest and no cart row created
#[tokio::test]
async fn rejects_negative_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let service = CartService::new(db);
    let result = service.upsert_line(user.id, items[0].id, -1).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(matches!(
        service.get_cart(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the NotFound mapping for unknown items.
#[tokio::test]
async fn rejects_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = CartService::new(db);
    let result = service.upsert_line(user.id, Uuid::new_v4(), 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the single zero-quantity policy: writing quantity 0 deletes the
/// line rather than storing a zero.
#[tokio::test]
async fn zero_quantity_deletes_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let service = CartService::new(db);
    service.upsert_line(user.id, items[0].id, 3).await.unwrap();

    let cart = service.upsert_line(user.id, items[0].id, 0).await.unwrap();

    assert!(cart.items.is_empty());
    assert_eq!(cart.total_price, Decimal::ZERO);
    assert_eq!(cart.quantity, 0);
    // The vendor binding survives; only checkout and explicit empty unset it.
    assert_eq!(cart.vendor_id, Some(vendor.id));

    Ok(())
}

/// Tests that the line quantity is an overwrite, not an increment, through
/// the service path.
#[tokio::test]
async fn overwrites_existing_line_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let service = CartService::new(db);
    service.upsert_line(user.id, items[0].id, 3).await.unwrap();
    let cart = service.upsert_line(user.id, items[0].id, 5).await.unwrap();

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 5);
    assert_eq!(cart.total_price, dec!(50.00));
    assert_eq!(cart.quantity, 5);

    Ok(())
}

/// Tests that a zero-quantity request naming another vendor's item is a pure
/// removal: the cart keeps its vendor, lines, and totals. Only a positive
/// quantity may trigger the destructive vendor switch.
#[tokio::test]
async fn zero_quantity_for_other_vendor_item_leaves_cart_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor_a, items_a) = factory::helpers::create_catalog(db, &["10.00"]).await?;
    let vendor_b = factory::create_vendor(db).await?;
    let item_b = factory::create_item(db, vendor_b.id).await?;

    let service = CartService::new(db);
    service.upsert_line(user.id, items_a[0].id, 2).await.unwrap();

    let cart = service.upsert_line(user.id, item_b.id, 0).await.unwrap();

    assert_eq!(cart.vendor_id, Some(vendor_a.id));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].item_id, items_a[0].id);
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart.total_price, dec!(20.00));

    Ok(())
}

/// Tests that a removal request from a customer with no cart maps to
/// NotFound instead of creating one.
#[tokio::test]
async fn zero_quantity_without_cart_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let service = CartService::new(db);
    let result = service.upsert_line(user.id, items[0].id, 0).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.get_cart(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the upper quantity bound.
#[tokio::test]
async fn rejects_quantity_above_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let service = CartService::new(db);
    let result = service
        .upsert_line(user.id, items[0].id, MAX_LINE_QUANTITY + 1)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(matches!(
        service.get_cart(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that adding an item from another vendor resets the cart to that
/// vendor, dropping the previous vendor's lines.
#[tokio::test]
async fn switching_vendor_drops_previous_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vendor_a, items_a) = factory::helpers::create_catalog(db, &["10.00"]).await?;
    let vendor_b = factory::create_vendor(db).await?;
    let item_b = factory::create_item_with_price(db, vendor_b.id, dec!(7.00)).await?;

    let service = CartService::new(db);
    service.upsert_line(user.id, items_a[0].id, 2).await.unwrap();

    let cart = service.upsert_line(user.id, item_b.id, 1).await.unwrap();

    assert_eq!(cart.vendor_id, Some(vendor_b.id));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].item_id, item_b.id);
    assert_eq!(cart.total_price, dec!(7.00));
    assert_eq!(cart.quantity, 1);

    Ok(())
}
