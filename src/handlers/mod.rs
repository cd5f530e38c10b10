//! Tracker API Handlers

pub mod days;
pub mod milestones;
pub mod stats;
pub mod trackers;

use crate::models::ApiError;
use crate::services::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Convert service errors to HTTP responses
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ServiceError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
        };

        (status, Json(ApiError::new(error, &message))).into_response()
    }
}
