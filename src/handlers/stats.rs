//! Statistics Handler

use crate::models::ApiResponse;
use crate::services::ServiceError;
use crate::TrackerServices;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /trackers/:slug/stats - Derived statistics report
///
/// An unknown slug returns 404 before the engine runs; the computation
/// itself cannot fail.
pub async fn tracker_stats(
    State(services): State<Arc<TrackerServices>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let stats = services.trackers.stats(&slug).await?;
    Ok(Json(ApiResponse::new(stats)))
}
