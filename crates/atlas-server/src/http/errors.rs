//! Error translation at the HTTP boundary.

use atlas_core::RegistryError;
use axum::{http::StatusCode, Json};
use serde::Serialize;

/// JSON payload returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// The error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Builds an error payload for an arbitrary status code.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: status.as_u16(),
        }),
    )
}

/// Maps a registry error onto its HTTP status and payload.
///
/// `InvalidInput` surfaces as 422, `DuplicateName` as 409,
/// `PlanetNotFound` as 404; any other registry failure is an opaque 500.
pub fn registry_error_response(error: RegistryError) -> ApiError {
    let status = match error {
        RegistryError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RegistryError::DuplicateName { .. } => StatusCode::CONFLICT,
        RegistryError::PlanetNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}
