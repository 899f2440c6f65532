use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    data::vendor::VendorRepository,
    error::AppError,
    model::vendor::{CreateVendorDto, VendorDto},
    state::AppState,
};

/// GET /api/vendors
pub async fn list_vendors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vendors = VendorRepository::new(&state.db).list().await?;

    Ok(Json(
        vendors
            .into_iter()
            .map(VendorDto::from_entity)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/vendors/{id}
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let vendor = VendorRepository::new(&state.db)
        .get_by_id(vendor_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    Ok(Json(VendorDto::from_entity(vendor)))
}

/// POST /api/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(dto): Json<CreateVendorDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Vendor name is required".to_string()));
    }

    let vendor = VendorRepository::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(VendorDto::from_entity(vendor))))
}
