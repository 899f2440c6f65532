use super::*;

/// Tests that upserting a line twice overwrites the quantity.
///
/// Upsert semantics are overwrite, not additive: quantities 3 then 5 leave
/// exactly one line with quantity 5.
///
/// Expected: one line, quantity 5
#[tokio::test]
async fn overwrites_quantity_instead_of_adding() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(user.id, vendor.id).await?;

    repo.upsert_line(cart.id, items[0].id, 3).await?;
    repo.upsert_line(cart.id, items[0].id, 5).await?;

    let lines = repo.get_lines(cart.id).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item_id, items[0].id);
    assert_eq!(lines[0].quantity, 5);

    Ok(())
}

/// Tests that lines for distinct items coexist in one cart.
#[tokio::test]
async fn keeps_one_line_per_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00", "5.00"]).await?;

    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(user.id, vendor.id).await?;

    repo.upsert_line(cart.id, items[0].id, 2).await?;
    repo.upsert_line(cart.id, items[1].id, 1).await?;

    let count = entity::prelude::CartItem::find()
        .filter(entity::cart_item::Column::CartId.eq(cart.id))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests line removal, including removing a line that does not exist.
///
/// Expected: line gone after removal; removing again is a no-op
#[tokio::test]
async fn removes_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vendor, items) = factory::helpers::create_catalog(db, &["10.00"]).await?;

    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(user.id, vendor.id).await?;
    repo.upsert_line(cart.id, items[0].id, 2).await?;

    repo.remove_line(cart.id, items[0].id).await?;
    assert!(repo.get_lines(cart.id).await?.is_empty());

    // Removing a missing line must not error.
    repo.remove_line(cart.id, items[0].id).await?;

    Ok(())
}
