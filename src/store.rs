//! Tracker Record Store
//!
//! In-memory document store for tracker aggregates: one document per tracker,
//! looked up by id or slug. Reads hand out snapshot clones, so callers (the
//! statistics engine in particular) never alias data a concurrent writer
//! could touch. Durable persistence lives outside this service.

use crate::models::Tracker;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct TrackerStore {
    inner: RwLock<Documents>,
}

#[derive(Default)]
struct Documents {
    trackers: HashMap<Uuid, Tracker>,
    slugs: HashMap<String, Uuid>,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a snapshot by id.
    pub async fn get(&self, id: Uuid) -> Option<Tracker> {
        self.inner.read().await.trackers.get(&id).cloned()
    }

    /// Fetch a snapshot by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Option<Tracker> {
        let docs = self.inner.read().await;
        let id = docs.slugs.get(slug)?;
        docs.trackers.get(id).cloned()
    }

    pub async fn slug_exists(&self, slug: &str) -> bool {
        self.inner.read().await.slugs.contains_key(slug)
    }

    /// List snapshots, newest first.
    pub async fn list(&self) -> Vec<Tracker> {
        let docs = self.inner.read().await;
        let mut all: Vec<Tracker> = docs.trackers.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    pub async fn count(&self) -> i64 {
        self.inner.read().await.trackers.len() as i64
    }

    /// Insert or replace a whole document, keeping the slug index in sync.
    pub async fn put(&self, tracker: Tracker) {
        let mut docs = self.inner.write().await;
        let stale_slug = docs
            .trackers
            .get(&tracker.id)
            .filter(|previous| previous.slug != tracker.slug)
            .map(|previous| previous.slug.clone());
        if let Some(old_slug) = stale_slug {
            docs.slugs.remove(&old_slug);
        }
        docs.slugs.insert(tracker.slug.clone(), tracker.id);
        docs.trackers.insert(tracker.id, tracker);
    }

    pub async fn remove(&self, id: Uuid) -> Option<Tracker> {
        let mut docs = self.inner.write().await;
        let tracker = docs.trackers.remove(&id)?;
        docs.slugs.remove(&tracker.slug);
        Some(tracker)
    }
}
