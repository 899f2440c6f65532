//! Customer identity extraction.
//!
//! Authentication happens outside this service; an upstream gateway verifies
//! the caller and forwards the resolved customer id in the `x-customer-id`
//! header. This extractor only parses that header; token formats and session
//! handling live upstream.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::AppError;

pub const CUSTOMER_ID_HEADER: &str = "x-customer-id";

/// Resolved customer identity for the current request.
///
/// Rejects with 400 Bad Request when the header is missing or is not a valid
/// UUID.
pub struct CustomerId(pub Uuid);

impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(CUSTOMER_ID_HEADER).ok_or_else(|| {
            AppError::BadRequest(format!("Missing {} header", CUSTOMER_ID_HEADER))
        })?;

        let id = header
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!("Malformed {} header", CUSTOMER_ID_HEADER))
            })?;

        Ok(Self(id))
    }
}
