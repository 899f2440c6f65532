use super::*;

/// Tests lazy cart creation on first access.
///
/// Verifies that no cart row exists until `get_or_create` runs, and that the
/// created cart is empty with the requested vendor bound.
///
/// Expected: Ok with a fresh empty cart
#[tokio::test]
async fn creates_cart_lazily_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db).await?;

    let repo = CartRepository::new(db);
    assert!(repo.get(user.id).await?.is_none());

    let cart = repo.get_or_create(user.id, vendor.id).await?;

    assert_eq!(cart.id, user.id);
    assert_eq!(cart.total_price, Decimal::ZERO);
    assert_eq!(cart.quantity, 0);
    assert_eq!(cart.vendor_id, Some(vendor.id));

    assert!(repo.get(user.id).await?.is_some());

    Ok(())
}

/// Tests that `get_or_create` is a no-op for the already-bound vendor.
///
/// Expected: existing lines survive a same-vendor re-fetch
#[tokio::test]
async fn keeps_existing_cart_for_same_vendor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(user.id, vendor.id).await?;
    repo.upsert_line(cart.id, items[0].id, 2).await?;
    repo.recalculate(cart.id).await?;

    let again = repo.get_or_create(user.id, vendor.id).await?;

    assert_eq!(again.id, cart.id);
    assert_eq!(again.vendor_id, Some(vendor.id));
    assert_eq!(again.quantity, 2);
    assert_eq!(repo.get_lines(cart.id).await?.len(), 1);

    Ok(())
}

/// Tests the destructive vendor switch.
///
/// A cart holds items from exactly one vendor; rebinding to a different
/// vendor clears all lines and zeroes the totals with no merge step.
///
/// Expected: zero lines, zero totals, new vendor bound
#[tokio::test]
async fn resets_cart_on_vendor_switch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor_a, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;
    let vendor_b = factory::create_vendor(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(user.id, vendor_a.id).await?;
    repo.upsert_line(cart.id, items[0].id, 3).await?;
    repo.recalculate(cart.id).await?;

    let switched = repo.get_or_create(user.id, vendor_b.id).await?;

    assert_eq!(switched.vendor_id, Some(vendor_b.id));
    assert_eq!(switched.total_price, Decimal::ZERO);
    assert_eq!(switched.quantity, 0);
    assert!(repo.get_lines(cart.id).await?.is_empty());

    // Switching again to the same vendor is a no-op.
    let again = repo.get_or_create(user.id, vendor_b.id).await?;
    assert_eq!(again.vendor_id, Some(vendor_b.id));
    assert_eq!(again.quantity, 0);

    Ok(())
}
