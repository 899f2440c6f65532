use super::*;

/// Tests the legal lifecycle walk preparing -> ready -> delivered.
#[tokio::test]
async fn walks_the_legal_lifecycle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db).await?;
    let order = factory::create_order(db, user.id, vendor.id).await?;

    let service = OrderService::new(db);

    let updated = service.update_status(order.id, "ready").await.unwrap();
    assert_eq!(updated.status, "ready");

    let updated = service.update_status(order.id, "delivered").await.unwrap();
    assert_eq!(updated.status, "delivered");

    Ok(())
}

/// Tests that skipping a lifecycle step is refused: a preparing order cannot
/// jump straight to delivered.
#[tokio::test]
async fn refuses_skipping_ready() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db).await?;
    let order = factory::create_order(db, user.id, vendor.id).await?;

    let service = OrderService::new(db);
    let result = service.update_status(order.id, "delivered").await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unchanged = service.get(order.id).await.unwrap();
    assert_eq!(unchanged.status, "preparing");

    Ok(())
}

/// Tests that cancellation is allowed before delivery and is terminal.
#[tokio::test]
async fn cancelled_is_terminal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db).await?;
    let order = factory::create_order(db, user.id, vendor.id).await?;

    let service = OrderService::new(db);

    let cancelled = service.update_status(order.id, "cancelled").await.unwrap();
    assert_eq!(cancelled.status, "cancelled");

    let result = service.update_status(order.id, "preparing").await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a delivered order refuses any further transition.
#[tokio::test]
async fn delivered_is_terminal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, vendor.id)
        .status(OrderStatus::Delivered)
        .build()
        .await?;

    let result = OrderService::new(db)
        .update_status(order.id, "cancelled")
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the BadRequest mapping for an unrecognized status string.
#[tokio::test]
async fn unknown_status_is_a_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db).await?;
    let order = factory::create_order(db, user.id, vendor.id).await?;

    let result = OrderService::new(db)
        .update_status(order.id, "shipped")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the NotFound mapping for a missing order.
#[tokio::test]
async fn missing_order_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db)
        .update_status(Uuid::new_v4(), "ready")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
