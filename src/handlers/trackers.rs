//! Tracker CRUD Handlers

use crate::models::*;
use crate::services::ServiceError;
use crate::TrackerServices;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// GET /trackers - List trackers
pub async fn list_trackers(
    State(services): State<Arc<TrackerServices>>,
    Query(query): Query<TrackerQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let trackers = services.trackers.list(&query).await;
    Ok(Json(ApiResponse::new(trackers)))
}

/// GET /trackers/:slug - Get tracker by slug
pub async fn get_tracker_by_slug(
    State(services): State<Arc<TrackerServices>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let tracker = services.trackers.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::new(tracker)))
}

/// POST /trackers - Create a new tracker
pub async fn create_tracker(
    State(services): State<Arc<TrackerServices>>,
    Json(req): Json<CreateTrackerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let tracker = services.trackers.create(req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(tracker))))
}

/// PUT /trackers/:id - Update tracker metadata
pub async fn update_tracker(
    State(services): State<Arc<TrackerServices>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTrackerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let tracker = services.trackers.update(id, req).await?;

    Ok(Json(ApiResponse::new(tracker)))
}

/// DELETE /trackers/:id - Delete a tracker
pub async fn delete_tracker(
    State(services): State<Arc<TrackerServices>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    services.trackers.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
