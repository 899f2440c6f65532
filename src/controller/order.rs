use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError, middleware::identity::CustomerId, model::order::UpdateOrderStatusDto,
    service::order::OrderService, state::AppState,
};

/// GET /api/orders
/// List the customer's orders, newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db)
        .list_for_customer(customer_id)
        .await?;

    Ok(Json(orders))
}

/// GET /api/orders/{id}
/// Get one order with its lines.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db).get(order_id).await?;

    Ok(Json(order))
}

/// PUT /api/orders/{id}
/// Staff status transition. Illegal transitions are rejected with 409.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .update_status(order_id, &dto.status)
        .await?;

    Ok(Json(order))
}
