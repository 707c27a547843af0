//! The store trait

use crate::error::StoreError;
use deftrack_domain::{NewTracker, TrackerConfig};

/// Persistence interface for tracker configurations
///
/// Implementations must enforce trimmed-name uniqueness inside [`save`]:
/// the workflow's `find_by_name` pre-check exists to report the collision
/// as a field error early, but the store is the authority, and a concurrent
/// duplicate must be refused with [`StoreError::NameExists`].
///
/// [`save`]: TrackerStore::save
pub trait TrackerStore: Send + Sync {
    /// Look up a stored configuration by its exact trimmed name
    fn find_by_name(&self, name: &str) -> Result<Option<TrackerConfig>, StoreError>;

    /// Persist a validated configuration, assigning id and creation time
    ///
    /// Refuses a duplicate trimmed name with [`StoreError::NameExists`].
    fn save(&self, tracker: NewTracker) -> Result<TrackerConfig, StoreError>;

    /// All stored configurations, ordered by name
    fn all(&self) -> Result<Vec<TrackerConfig>, StoreError>;

    /// Number of stored configurations
    fn count(&self) -> Result<usize, StoreError>;
}
