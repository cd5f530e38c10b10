//! Tracker Services

use crate::models::*;
use crate::stats::{compute_stats, TrackerStats};
use crate::store::TrackerStore;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Tracker service
///
/// Owns the write-path invariants (unique slug, upsert-by-day-number) and
/// hands read-side snapshots to the statistics engine.
pub struct TrackerService {
    store: Arc<TrackerStore>,
}

impl TrackerService {
    pub fn new(store: Arc<TrackerStore>) -> Self {
        Self { store }
    }

    /// List trackers with pagination, newest first
    pub async fn list(&self, query: &TrackerQuery) -> Paginated<Tracker> {
        let all = self.store.list().await;
        let total = all.len() as i64;

        let data = all
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.per_page() as usize)
            .collect();

        Paginated {
            data,
            pagination: PaginationMeta::new(total, query.page(), query.per_page()),
        }
    }

    /// Get a tracker by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Tracker, ServiceError> {
        self.store
            .get_by_slug(slug)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Tracker not found: {}", slug)))
    }

    /// Get a tracker by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Tracker, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Tracker not found: {}", id)))
    }

    /// Compute the statistics report for the tracker with this slug
    pub async fn stats(&self, slug: &str) -> Result<TrackerStats, ServiceError> {
        let tracker = self.get_by_slug(slug).await?;
        Ok(compute_stats(&tracker))
    }

    /// Create a new tracker
    pub async fn create(&self, req: CreateTrackerRequest) -> Result<Tracker, ServiceError> {
        let slug = slug::slugify(&req.name);
        if self.store.slug_exists(&slug).await {
            return Err(ServiceError::Conflict(format!(
                "A tracker with slug '{}' already exists",
                slug
            )));
        }

        let now = Utc::now();
        let tracker = Tracker {
            id: Uuid::new_v4(),
            name: req.name,
            slug,
            description: req.description,
            total_days: req.total_days,
            daily_hours: req.daily_hours,
            days: Vec::new(),
            milestones: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.store.put(tracker.clone()).await;
        tracing::info!(tracker = %tracker.slug, "Created tracker");

        Ok(tracker)
    }

    /// Update tracker metadata
    pub async fn update(&self, id: Uuid, req: UpdateTrackerRequest) -> Result<Tracker, ServiceError> {
        let mut tracker = self.get_by_id(id).await?;

        if let Some(name) = req.name {
            let slug = slug::slugify(&name);
            if slug != tracker.slug && self.store.slug_exists(&slug).await {
                return Err(ServiceError::Conflict(format!(
                    "A tracker with slug '{}' already exists",
                    slug
                )));
            }
            tracker.name = name;
            tracker.slug = slug;
        }
        if let Some(description) = req.description {
            tracker.description = Some(description);
        }
        if let Some(total_days) = req.total_days {
            tracker.total_days = total_days;
        }
        if let Some(daily_hours) = req.daily_hours {
            tracker.daily_hours = daily_hours;
        }
        tracker.updated_at = Utc::now();

        self.store.put(tracker.clone()).await;

        Ok(tracker)
    }

    /// Delete a tracker (its days and milestones go with it)
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .remove(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Tracker not found: {}", id)))?;

        tracing::info!(%id, "Deleted tracker");

        Ok(())
    }

    /// Upsert the day record with this day number (last write wins)
    pub async fn upsert_day(
        &self,
        id: Uuid,
        day_number: u32,
        req: UpsertDayRequest,
    ) -> Result<Tracker, ServiceError> {
        if day_number == 0 {
            return Err(ServiceError::Validation(
                "Day number must be at least 1".to_string(),
            ));
        }

        let mut tracker = self.get_by_id(id).await?;

        let day = TrackerDay {
            day_number,
            status: req.status,
            hours_logged: req.hours_logged,
            mood: req.mood,
            checklist: req.checklist,
            notes: req.notes,
        };

        match tracker.days.iter_mut().find(|d| d.day_number == day_number) {
            Some(existing) => *existing = day,
            None => tracker.days.push(day),
        }
        tracker.updated_at = Utc::now();

        self.store.put(tracker.clone()).await;

        Ok(tracker)
    }

    /// Remove the day record with this day number
    pub async fn delete_day(&self, id: Uuid, day_number: u32) -> Result<Tracker, ServiceError> {
        let mut tracker = self.get_by_id(id).await?;

        let before = tracker.days.len();
        tracker.days.retain(|d| d.day_number != day_number);
        if tracker.days.len() == before {
            return Err(ServiceError::NotFound(format!(
                "Day {} not found on tracker {}",
                day_number, tracker.slug
            )));
        }
        tracker.updated_at = Utc::now();

        self.store.put(tracker.clone()).await;

        Ok(tracker)
    }

    /// Add a milestone
    pub async fn add_milestone(
        &self,
        id: Uuid,
        req: MilestoneRequest,
    ) -> Result<Tracker, ServiceError> {
        let mut tracker = self.get_by_id(id).await?;

        tracker.milestones.push(Milestone {
            id: Uuid::new_v4(),
            title: req.title,
            day_number: req.day_number,
            achieved: false,
        });
        tracker.updated_at = Utc::now();

        self.store.put(tracker.clone()).await;

        Ok(tracker)
    }

    /// Mark a milestone as achieved
    pub async fn achieve_milestone(
        &self,
        id: Uuid,
        milestone_id: Uuid,
    ) -> Result<Tracker, ServiceError> {
        let mut tracker = self.get_by_id(id).await?;

        let milestone = tracker
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)
            .ok_or_else(|| ServiceError::NotFound(format!("Milestone not found: {}", milestone_id)))?;
        milestone.achieved = true;
        tracker.updated_at = Utc::now();

        self.store.put(tracker.clone()).await;

        Ok(tracker)
    }

    /// Remove a milestone
    pub async fn delete_milestone(
        &self,
        id: Uuid,
        milestone_id: Uuid,
    ) -> Result<Tracker, ServiceError> {
        let mut tracker = self.get_by_id(id).await?;

        let before = tracker.milestones.len();
        tracker.milestones.retain(|m| m.id != milestone_id);
        if tracker.milestones.len() == before {
            return Err(ServiceError::NotFound(format!(
                "Milestone not found: {}",
                milestone_id
            )));
        }
        tracker.updated_at = Utc::now();

        self.store.put(tracker.clone()).await;

        Ok(tracker)
    }
}
