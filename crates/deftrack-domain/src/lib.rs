//! Domain types for defect-tracker configuration submission
//!
//! Defines the data the submission workflow operates on:
//! - [`TrackerCandidate`]: an unpersisted configuration submitted for validation
//! - [`TrackerConfig`]: a stored configuration record with its assigned id
//! - [`FieldErrors`]: the accumulate-then-report validation error collector
//! - [`SubmissionOutcome`]: the tagged success/failure result of a submission

pub mod field_error;
pub mod outcome;
pub mod tracker;

pub use field_error::{ErrorCode, FieldError, FieldErrors};
pub use outcome::SubmissionOutcome;
pub use tracker::{NewTracker, TrackerCandidate, TrackerConfig, TrackerId, TrackerType, TypeId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
