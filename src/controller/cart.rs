use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::identity::CustomerId,
    model::{api::MessageDto, cart::UpsertCartLineDto},
    service::{cart::CartService, checkout::CheckoutService},
    state::AppState,
};

/// GET /api/cart
/// Get the customer's cart with its line items.
pub async fn get_cart(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
) -> Result<impl IntoResponse, AppError> {
    let cart = CartService::new(&state.db).get_cart(customer_id).await?;

    Ok(Json(cart))
}

/// POST /api/cart
/// Add an item to the cart or overwrite an existing line's quantity.
/// Quantity 0 removes the line.
pub async fn upsert_line(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
    Json(dto): Json<UpsertCartLineDto>,
) -> Result<impl IntoResponse, AppError> {
    let cart = CartService::new(&state.db)
        .upsert_line(customer_id, dto.item_id, dto.quantity)
        .await?;

    Ok(Json(cart))
}

/// DELETE /api/cart
/// Empty the cart: remove all lines, zero the totals, unbind the vendor.
pub async fn empty_cart(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
) -> Result<impl IntoResponse, AppError> {
    CartService::new(&state.db).empty_cart(customer_id).await?;

    Ok(Json(MessageDto {
        message: "Cart emptied successfully".to_string(),
    }))
}

/// POST /api/cart/checkout
/// Atomically convert the cart into an order.
pub async fn checkout(
    State(state): State<AppState>,
    CustomerId(customer_id): CustomerId,
) -> Result<impl IntoResponse, AppError> {
    let order = CheckoutService::new(&state.db).checkout(customer_id).await?;

    Ok((StatusCode::CREATED, Json(order)))
}
