//! Tracker Data Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Day record status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

/// Mood recorded for a day
///
/// Unknown wire values fall through to `None` rather than failing
/// deserialization; the statistics engine ignores them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Tough,
    #[default]
    #[serde(other)]
    None,
}

/// One checklist entry on a day record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// One entry in a tracker's log, keyed by a 1-based day number
///
/// Day numbers are unique within a tracker but need not be contiguous,
/// and the collection is not kept sorted in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerDay {
    pub day_number: u32,
    pub status: DayStatus,
    #[serde(default)]
    pub hours_logged: f64,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Admin-managed milestone marker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: Uuid,
    pub title: String,
    pub day_number: u32,
    pub achieved: bool,
}

/// Tracker aggregate root
///
/// `total_days` is the planned duration and the denominator for completion
/// percentage and week/month bucketing; it is independent of how many day
/// records actually exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub total_days: u32,
    pub daily_hours: f64,
    pub days: Vec<TrackerDay>,
    pub milestones: Vec<Milestone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create tracker request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackerRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 3650, message = "Planned duration must be 1-3650 days"))]
    pub total_days: u32,

    #[validate(range(min = 0.0, max = 24.0))]
    #[serde(default)]
    pub daily_hours: f64,
}

/// Update tracker request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackerRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 3650))]
    pub total_days: Option<u32>,

    #[validate(range(min = 0.0, max = 24.0))]
    pub daily_hours: Option<f64>,
}

/// Upsert day request (the day number comes from the URL path)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDayRequest {
    pub status: DayStatus,

    #[validate(range(min = 0.0, max = 24.0))]
    #[serde(default)]
    pub hours_logged: f64,

    #[serde(default)]
    pub mood: Mood,

    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// Create milestone request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(range(min = 1, max = 3650))]
    pub day_number: u32,
}

/// Tracker list query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl TrackerQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = (total as f64 / per_page as f64).ceil() as i64;
        Self {
            total,
            page,
            per_page,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Success envelope for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// API error response body
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}
