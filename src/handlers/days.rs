//! Day Record Handlers

use crate::models::*;
use crate::services::ServiceError;
use crate::TrackerServices;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// PUT /trackers/:id/days/:day_number - Upsert a day record
pub async fn upsert_day(
    State(services): State<Arc<TrackerServices>>,
    Path((id, day_number)): Path<(Uuid, u32)>,
    Json(req): Json<UpsertDayRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let tracker = services.trackers.upsert_day(id, day_number, req).await?;

    Ok(Json(ApiResponse::new(tracker)))
}

/// DELETE /trackers/:id/days/:day_number - Remove a day record
pub async fn delete_day(
    State(services): State<Arc<TrackerServices>>,
    Path((id, day_number)): Path<(Uuid, u32)>,
) -> Result<impl IntoResponse, ServiceError> {
    let tracker = services.trackers.delete_day(id, day_number).await?;

    Ok(Json(ApiResponse::new(tracker)))
}
