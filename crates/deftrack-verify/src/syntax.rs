//! Syntax-level URL verification
//!
//! No network access: accepts URLs shaped like `http(s)://host[:port][/path]`
//! and nothing else. A malformed URL is reported as a bare failure so the
//! workflow attaches its generic message; the https-only refusal writes its
//! own field error because the generic message would hide the actual problem.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::verifier::EndpointVerifier;
use deftrack_domain::{ErrorCode, FieldErrors, TrackerCandidate};

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(https?)://[A-Za-z0-9][A-Za-z0-9.-]*(:\d{1,5})?(/\S*)?$")
        .expect("url pattern is valid")
});

/// Stock [`EndpointVerifier`]: shape check only
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlSyntaxVerifier {
    https_only: bool,
}

impl UrlSyntaxVerifier {
    /// Verifier accepting both `http` and `https`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifier refusing plain-`http` endpoints
    #[inline]
    #[must_use]
    pub fn https_only() -> Self {
        Self { https_only: true }
    }
}

impl EndpointVerifier for UrlSyntaxVerifier {
    fn verify(&self, candidate: &TrackerCandidate, errors: &mut FieldErrors) -> bool {
        let url = candidate.url.trim();

        if !URL_PATTERN.is_match(url) {
            tracing::debug!(url, "endpoint url failed syntax check");
            return false;
        }

        if self.https_only && !url[..5].eq_ignore_ascii_case("https") {
            errors.reject(
                "url",
                ErrorCode::Invalid,
                "HTTPS is required for tracker endpoints.",
            );
            return false;
        }

        true
    }
}
