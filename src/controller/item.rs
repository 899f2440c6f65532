use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    data::{item::ItemRepository, vendor::VendorRepository},
    error::AppError,
    model::item::{CreateItemDto, CreateItemParams, ItemDto},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ItemListQuery {
    pub vendor_id: Option<Uuid>,
}

/// GET /api/items?vendor_id=
/// List catalog items, optionally restricted to one vendor.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ItemRepository::new(&state.db);

    let items = match query.vendor_id {
        Some(vendor_id) => repo.list_by_vendor(vendor_id).await?,
        None => repo.list().await?,
    };

    Ok(Json(
        items.into_iter().map(ItemDto::from_entity).collect::<Vec<_>>(),
    ))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemRepository::new(&state.db)
        .get_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    Ok(Json(ItemDto::from_entity(item)))
}

/// POST /api/items
/// Create a catalog item for an existing vendor.
pub async fn create_item(
    State(state): State<AppState>,
    Json(dto): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Item name is required".to_string()));
    }
    if dto.price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Item price cannot be negative".to_string(),
        ));
    }

    VendorRepository::new(&state.db)
        .get_by_id(dto.vendor_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    let item = ItemRepository::new(&state.db)
        .create(CreateItemParams {
            vendor_id: dto.vendor_id,
            name: dto.name,
            price: dto.price,
            img: dto.img,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ItemDto::from_entity(item))))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ItemRepository::new(&state.db);

    repo.get_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    repo.delete(item_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
