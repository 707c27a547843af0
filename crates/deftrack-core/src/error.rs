//! Workflow errors
//!
//! Validation failures are never errors here; they travel inside the
//! rejected outcome. This type covers only infrastructure faults the
//! workflow cannot handle itself.

use deftrack_store::StoreError;

/// Infrastructure failure during submission
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The persistence layer failed
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}
