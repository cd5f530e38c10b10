//! Milestone Handlers

use crate::models::*;
use crate::services::ServiceError;
use crate::TrackerServices;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// POST /trackers/:id/milestones - Add a milestone
pub async fn add_milestone(
    State(services): State<Arc<TrackerServices>>,
    Path(id): Path<Uuid>,
    Json(req): Json<MilestoneRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let tracker = services.trackers.add_milestone(id, req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(tracker))))
}

/// POST /trackers/:id/milestones/:milestone_id/achieve - Mark achieved
pub async fn achieve_milestone(
    State(services): State<Arc<TrackerServices>>,
    Path((id, milestone_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServiceError> {
    let tracker = services.trackers.achieve_milestone(id, milestone_id).await?;

    Ok(Json(ApiResponse::new(tracker)))
}

/// DELETE /trackers/:id/milestones/:milestone_id - Remove a milestone
pub async fn delete_milestone(
    State(services): State<Arc<TrackerServices>>,
    Path((id, milestone_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ServiceError> {
    let tracker = services.trackers.delete_milestone(id, milestone_id).await?;

    Ok(Json(ApiResponse::new(tracker)))
}
