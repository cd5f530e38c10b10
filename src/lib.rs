//! Day Tracker API
//!
//! REST API for the day-tracker subsystem of a personal portfolio CMS:
//! tracker CRUD, day-record upserts, milestones, and a derived statistics
//! report (streaks, completion percentages, weekly/monthly rollups).

pub mod handlers;
pub mod models;
pub mod services;
pub mod stats;
pub mod store;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::env;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host (from HOST env var)
    pub host: String,

    /// Bind port (from PORT env var)
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("HOST must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Aggregated services container
pub struct TrackerServices {
    pub trackers: services::TrackerService,
}

impl TrackerServices {
    pub fn new(store: Arc<store::TrackerStore>) -> Self {
        Self {
            trackers: services::TrackerService::new(store),
        }
    }
}

/// Assemble the API router.
///
/// Public read-only routes and admin write routes are kept in separate
/// sub-routers: session middleware belongs to an external collaborator, and
/// this split marks the seam where it would attach.
pub fn router(services: Arc<TrackerServices>) -> Router {
    // Public routes (read-only)
    let public = Router::new()
        .route("/trackers", get(handlers::trackers::list_trackers))
        .route("/trackers/:slug", get(handlers::trackers::get_tracker_by_slug))
        .route("/trackers/:slug/stats", get(handlers::stats::tracker_stats));

    // Admin routes (write path; owns the data invariants). Addressed by id,
    // not slug, since a rename moves the slug.
    let admin = Router::new()
        .route("/admin/trackers", post(handlers::trackers::create_tracker))
        .route("/admin/trackers/:id", put(handlers::trackers::update_tracker))
        .route("/admin/trackers/:id", delete(handlers::trackers::delete_tracker))
        .route("/admin/trackers/:id/days/:day_number", put(handlers::days::upsert_day))
        .route(
            "/admin/trackers/:id/days/:day_number",
            delete(handlers::days::delete_day),
        )
        .route("/admin/trackers/:id/milestones", post(handlers::milestones::add_milestone))
        .route(
            "/admin/trackers/:id/milestones/:milestone_id/achieve",
            post(handlers::milestones::achieve_milestone),
        )
        .route(
            "/admin/trackers/:id/milestones/:milestone_id",
            delete(handlers::milestones::delete_milestone),
        );

    Router::new()
        .merge(public)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(services)
}
