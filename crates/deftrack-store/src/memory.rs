//! In-memory reference store
//!
//! Backed by a name-keyed [`DashMap`]; the vacant-entry insert makes the
//! uniqueness check and the write a single atomic step.

use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::StoreError;
use crate::store::TrackerStore;
use deftrack_domain::{NewTracker, TrackerConfig, TrackerId};

/// In-memory [`TrackerStore`] keyed by trimmed name
#[derive(Debug, Default)]
pub struct InMemoryTrackerStore {
    by_name: DashMap<String, TrackerConfig>,
}

impl InMemoryTrackerStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind an [`Arc`]
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl TrackerStore for InMemoryTrackerStore {
    fn find_by_name(&self, name: &str) -> Result<Option<TrackerConfig>, StoreError> {
        Ok(self.by_name.get(name).map(|entry| entry.value().clone()))
    }

    fn save(&self, tracker: NewTracker) -> Result<TrackerConfig, StoreError> {
        match self.by_name.entry(tracker.name.clone()) {
            Entry::Occupied(_) => Err(StoreError::NameExists { name: tracker.name }),
            Entry::Vacant(slot) => {
                let record = TrackerConfig {
                    id: TrackerId::new(),
                    name: tracker.name,
                    type_id: tracker.type_id,
                    type_name: tracker.type_name,
                    url: tracker.url,
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                tracing::debug!(name = %record.name, id = %record.id, "stored tracker configuration");
                Ok(record)
            }
        }
    }

    fn all(&self) -> Result<Vec<TrackerConfig>, StoreError> {
        let mut records: Vec<TrackerConfig> = self
            .by_name
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.by_name.len())
    }
}
