//! The verifier trait and the certificate-trust sentinel

use deftrack_domain::{FieldErrors, TrackerCandidate};

/// Message a verifier writes against the `url` field when the remote
/// service presented a certificate the local trust store does not accept.
///
/// The workflow compares field-error messages against this exact string to
/// distinguish the remediable certificate case from a plain bad endpoint.
pub const UNTRUSTED_CERTIFICATE: &str =
    "The remote server presented an untrusted or self-signed certificate.";

/// Verifies that a candidate's endpoint is usable
///
/// Returns `true` when the endpoint checks out. On failure the verifier
/// may write one or more field-scoped messages into `errors`; when it
/// reports failure without writing a `url` error the workflow records a
/// generic one.
pub trait EndpointVerifier: Send + Sync {
    /// Check the candidate's endpoint, writing failures into `errors`
    fn verify(&self, candidate: &TrackerCandidate, errors: &mut FieldErrors) -> bool;
}
