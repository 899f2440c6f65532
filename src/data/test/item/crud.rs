use super::*;

/// Tests item resolution by id, the catalog-lookup leaf the cart store and
/// checkout depend on.
#[tokio::test]
async fn gets_item_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vendor = factory::create_vendor(db).await?;
    let item = factory::create_item_with_price(db, vendor.id, dec!(4.25)).await?;

    let repo = ItemRepository::new(db);

    let found = repo.get_by_id(item.id).await?.unwrap();
    assert_eq!(found.vendor_id, vendor.id);
    assert_eq!(found.price, dec!(4.25));

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Tests that vendor-scoped listing excludes other vendors' items.
#[tokio::test]
async fn lists_items_by_vendor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vendor_a = factory::create_vendor(db).await?;
    let vendor_b = factory::create_vendor(db).await?;
    factory::create_item(db, vendor_a.id).await?;
    factory::create_item(db, vendor_a.id).await?;
    factory::create_item(db, vendor_b.id).await?;

    let repo = ItemRepository::new(db);

    assert_eq!(repo.list_by_vendor(vendor_a.id).await?.len(), 2);
    assert_eq!(repo.list_by_vendor(vendor_b.id).await?.len(), 1);
    assert_eq!(repo.list().await?.len(), 3);

    Ok(())
}

/// Tests item creation and deletion.
#[tokio::test]
async fn creates_and_deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vendor = factory::create_vendor(db).await?;

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            vendor_id: vendor.id,
            name: "Margherita".to_string(),
            price: dec!(12.50),
            img: None,
        })
        .await?;

    assert_eq!(item.name, "Margherita");
    assert_eq!(item.price, dec!(12.50));

    repo.delete(item.id).await?;
    assert!(repo.get_by_id(item.id).await?.is_none());

    Ok(())
}
