//! Storage errors

/// Errors raised by a [`TrackerStore`](crate::TrackerStore)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with the same trimmed name already exists
    ///
    /// The write-time uniqueness refusal. The workflow maps this back to a
    /// name-taken validation outcome rather than an infrastructure failure.
    #[error("a tracker named '{name}' already exists")]
    NameExists {
        /// The conflicting trimmed name
        name: String,
    },

    /// The backing store cannot be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this error is the write-time uniqueness refusal
    #[inline]
    #[must_use]
    pub fn is_name_conflict(&self) -> bool {
        matches!(self, Self::NameExists { .. })
    }
}
