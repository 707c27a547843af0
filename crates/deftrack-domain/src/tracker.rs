//! Tracker configuration records
//!
//! Three representations, one per lifecycle stage:
//! - [`TrackerCandidate`]: raw caller input, nothing validated yet
//! - [`NewTracker`]: normalized payload accepted by the store
//! - [`TrackerConfig`]: persisted record with store-assigned id and timestamp

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a stored tracker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrackerId(pub Uuid);

impl TrackerId {
    /// Generate new tracker ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TrackerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a registered tracker type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A known defect-tracker product the system can talk to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerType {
    /// Registry-assigned identifier
    pub id: TypeId,
    /// Product name shown to users
    pub name: String,
}

impl TrackerType {
    /// Create a tracker type
    #[inline]
    #[must_use]
    pub fn new(id: TypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An unpersisted tracker configuration submitted for validation
///
/// Carries exactly the fields the workflow accepts; constructing one is the
/// caller's input-assembly step. All fields may be empty or absent, the
/// workflow validates everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerCandidate {
    /// Display name, unique among stored configurations after trimming
    pub name: String,
    /// Reference to a registered tracker type, if the caller supplied one
    pub type_id: Option<TypeId>,
    /// Endpoint URL of the remote tracker
    pub url: String,
}

impl TrackerCandidate {
    /// Create a candidate from raw input fields
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: Option<TypeId>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id,
            url: url.into(),
        }
    }

    /// Name with leading/trailing whitespace removed
    ///
    /// Uniqueness and blank checks operate on this form. Internal whitespace
    /// and case are preserved.
    #[inline]
    #[must_use]
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// A validated, normalized payload ready for the store's `save`
///
/// Produced by the workflow once every check has passed: the name is trimmed,
/// the type is resolved, the URL is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTracker {
    /// Trimmed display name
    pub name: String,
    /// Resolved tracker type id
    pub type_id: TypeId,
    /// Resolved tracker type name
    pub type_name: String,
    /// Verified endpoint URL
    pub url: String,
}

/// A persisted tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Store-assigned identifier
    pub id: TrackerId,
    /// Trimmed display name, unique in the store
    pub name: String,
    /// Resolved tracker type id
    pub type_id: TypeId,
    /// Resolved tracker type name
    pub type_name: String,
    /// Verified endpoint URL
    pub url: String,
    /// Store-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}
