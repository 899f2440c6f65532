use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{cart, item, order, vendor},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/cart",
            get(cart::get_cart)
                .post(cart::upsert_line)
                .delete(cart::empty_cart),
        )
        .route("/api/cart/checkout", post(cart::checkout))
        .route("/api/orders", get(order::list_orders))
        .route(
            "/api/orders/{id}",
            get(order::get_order).put(order::update_order_status),
        )
        .route("/api/items", get(item::list_items).post(item::create_item))
        .route(
            "/api/items/{id}",
            get(item::get_item).delete(item::delete_item),
        )
        .route(
            "/api/vendors",
            get(vendor::list_vendors).post(vendor::create_vendor),
        )
        .route("/api/vendors/{id}", get(vendor::get_vendor))
}
