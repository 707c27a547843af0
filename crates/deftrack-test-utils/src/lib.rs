//! Testing utilities for the deftrack workspace
//!
//! Shared fixtures, a scripted endpoint-verifier double, and workflow
//! setup helpers used by the end-to-end scenario suite.

#![allow(missing_docs)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use deftrack_core::{FixedPrincipal, SubmissionWorkflow, TypeRegistry};
use deftrack_domain::{ErrorCode, FieldErrors, TrackerCandidate, TypeId};
use deftrack_store::InMemoryTrackerStore;
use deftrack_verify::{EndpointVerifier, UrlSyntaxVerifier, UNTRUSTED_CERTIFICATE};

/// One scripted response of a [`ScriptedVerifier`]
#[derive(Debug, Clone)]
pub enum Verdict {
    /// Endpoint checks out
    Pass,
    /// Failure without a field error; the workflow adds its generic message
    Fail,
    /// Failure with a verifier-written `url` field error
    FieldError(String),
    /// Failure with the untrusted-certificate sentinel on the `url` field
    UntrustedCertificate,
}

/// Endpoint verifier replaying a scripted sequence of verdicts
///
/// Pops one verdict per call; once the script is exhausted every further
/// call passes. Counts calls so tests can assert the verifier was skipped.
pub struct ScriptedVerifier {
    script: Mutex<VecDeque<Verdict>>,
    calls: AtomicUsize,
}

impl ScriptedVerifier {
    pub fn new(script: impl IntoIterator<Item = Verdict>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn shared(script: impl IntoIterator<Item = Verdict>) -> Arc<Self> {
        Arc::new(Self::new(script))
    }

    /// Number of times `verify` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EndpointVerifier for ScriptedVerifier {
    fn verify(&self, _candidate: &TrackerCandidate, errors: &mut FieldErrors) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().pop_front() {
            None | Some(Verdict::Pass) => true,
            Some(Verdict::Fail) => false,
            Some(Verdict::FieldError(message)) => {
                errors.reject("url", ErrorCode::Invalid, message);
                false
            }
            Some(Verdict::UntrustedCertificate) => {
                errors.reject("url", ErrorCode::Invalid, UNTRUSTED_CERTIFICATE);
                false
            }
        }
    }
}

/// Registry seeded with the built-in tracker products
pub fn seeded_registry() -> TypeRegistry {
    TypeRegistry::with_defaults()
}

/// Candidate that passes every check against a fresh default workflow
pub fn valid_candidate(name: &str) -> TrackerCandidate {
    TrackerCandidate::new(name, Some(TypeId(1)), "https://bugzilla.example.com")
}

/// Workflow wired to a fresh in-memory store and the stock syntax verifier
pub fn setup_workflow() -> (SubmissionWorkflow, Arc<InMemoryTrackerStore>) {
    let store = InMemoryTrackerStore::shared();
    let workflow = SubmissionWorkflow::new(
        seeded_registry(),
        store.clone(),
        Arc::new(UrlSyntaxVerifier::new()),
        Arc::new(FixedPrincipal::new("tester")),
    );
    (workflow, store)
}

/// Workflow wired to a fresh in-memory store and the given scripted verifier
pub fn setup_scripted_workflow(
    verifier: Arc<ScriptedVerifier>,
) -> (SubmissionWorkflow, Arc<InMemoryTrackerStore>) {
    let store = InMemoryTrackerStore::shared();
    let workflow = SubmissionWorkflow::new(
        seeded_registry(),
        store.clone(),
        verifier,
        Arc::new(FixedPrincipal::new("tester")),
    );
    (workflow, store)
}
