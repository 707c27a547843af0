//! Defect-tracker configuration submission workflow
//!
//! The one entry point is [`SubmissionWorkflow::submit`]: validate a
//! candidate configuration, enforce the domain invariants (non-blank unique
//! name, known tracker type, verifiable endpoint), persist it if valid, and
//! return a structured outcome.
//!
//! # Workflow
//!
//! ```text
//! TrackerCandidate → validate (accumulate field errors)
//!                  → verify endpoint (only if the type resolved)
//!                  → save (store enforces name uniqueness at the write)
//!                  → SubmissionOutcome::{Created, Rejected}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use deftrack_core::{SubmissionWorkflow, SystemPrincipal, TypeRegistry};
//! use deftrack_domain::TrackerCandidate;
//! use deftrack_store::InMemoryTrackerStore;
//! use deftrack_verify::UrlSyntaxVerifier;
//!
//! let workflow = SubmissionWorkflow::new(
//!     TypeRegistry::with_defaults(),
//!     InMemoryTrackerStore::shared(),
//!     Arc::new(UrlSyntaxVerifier::new()),
//!     Arc::new(SystemPrincipal),
//! );
//!
//! let outcome = workflow.submit(TrackerCandidate::new("Tracker1", Some(type_id), "https://good"))?;
//! ```

pub mod config;
pub mod error;
pub mod principal;
pub mod registry;
pub mod telemetry;
pub mod workflow;

pub use config::WorkflowConfig;
pub use error::SubmissionError;
pub use principal::{FixedPrincipal, PrincipalContext, SystemPrincipal};
pub use registry::TypeRegistry;
pub use workflow::SubmissionWorkflow;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
