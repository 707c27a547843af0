//! Endpoint verification seam
//!
//! The submission workflow never talks to a remote tracker itself; it hands
//! the candidate to an [`EndpointVerifier`] together with the field-error
//! collector as an error side channel. A verifier that detects an untrusted
//! certificate writes [`UNTRUSTED_CERTIFICATE`] against the `url` field so
//! the workflow can surface the remediation flag instead of a second
//! generic error.
//!
//! [`UrlSyntaxVerifier`] is the stock implementation: a syntax-level check
//! with no network access. Reachability and certificate checking belong to
//! external implementations of the trait.

pub mod syntax;
pub mod verifier;

pub use syntax::UrlSyntaxVerifier;
pub use verifier::{EndpointVerifier, UNTRUSTED_CERTIFICATE};
