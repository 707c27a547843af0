//! Submission outcomes
//!
//! Tagged result of a submission attempt. Success carries the stored record;
//! rejection carries the field-error map plus the certificate-remediation
//! flag. The enum serializes to a success/failure envelope an HTTP adapter
//! can return directly.

use crate::field_error::FieldErrors;
use crate::tracker::TrackerConfig;
use serde::{Deserialize, Serialize};

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Candidate passed every check and was persisted
    Created {
        /// The stored record, id and timestamp assigned
        tracker: TrackerConfig,
    },
    /// Candidate failed validation; nothing was persisted
    Rejected {
        /// Field-attributed messages for redisplay
        errors: FieldErrors,
        /// Whether the caller should offer a certificate-import remediation
        offer_certificate_import: bool,
    },
}

impl SubmissionOutcome {
    /// Success outcome wrapping the stored record
    #[inline]
    #[must_use]
    pub fn created(tracker: TrackerConfig) -> Self {
        Self::Created { tracker }
    }

    /// Failure outcome wrapping the collected errors
    #[inline]
    #[must_use]
    pub fn rejected(errors: FieldErrors, offer_certificate_import: bool) -> Self {
        Self::Rejected {
            errors,
            offer_certificate_import,
        }
    }

    /// Whether the submission succeeded
    #[inline]
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// Whether the submission was rejected
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The stored record, if the submission succeeded
    #[inline]
    #[must_use]
    pub fn created_record(&self) -> Option<&TrackerConfig> {
        match self {
            Self::Created { tracker } => Some(tracker),
            Self::Rejected { .. } => None,
        }
    }

    /// The collected errors, if the submission was rejected
    #[inline]
    #[must_use]
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Created { .. } => None,
            Self::Rejected { errors, .. } => Some(errors),
        }
    }

    /// Whether the caller should surface the certificate-import remediation
    #[inline]
    #[must_use]
    pub fn offers_certificate_import(&self) -> bool {
        matches!(
            self,
            Self::Rejected {
                offer_certificate_import: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_error::ErrorCode;
    use crate::tracker::{TrackerId, TypeId};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn stored() -> TrackerConfig {
        TrackerConfig {
            id: TrackerId::new(),
            name: "Tracker1".to_string(),
            type_id: TypeId(5),
            type_name: "Bugzilla".to_string(),
            url: "https://good".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn created_accessors() {
        let outcome = SubmissionOutcome::created(stored());
        assert!(outcome.is_created());
        assert!(!outcome.is_rejected());
        assert_eq!(outcome.created_record().unwrap().name, "Tracker1");
        assert!(outcome.errors().is_none());
        assert!(!outcome.offers_certificate_import());
    }

    #[test]
    fn rejected_accessors() {
        let mut errors = FieldErrors::new();
        errors.reject("name", ErrorCode::Required, "This field cannot be blank");
        let outcome = SubmissionOutcome::rejected(errors, true);

        assert!(outcome.is_rejected());
        assert!(outcome.created_record().is_none());
        assert!(outcome.errors().unwrap().contains("name", ErrorCode::Required));
        assert!(outcome.offers_certificate_import());
    }

    #[test]
    fn created_serializes_with_status_tag() {
        let outcome = SubmissionOutcome::created(stored());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "created");
        assert_eq!(json["tracker"]["name"], "Tracker1");
        assert_eq!(json["tracker"]["type_name"], "Bugzilla");
    }

    #[test]
    fn rejected_serializes_errors_by_field() {
        let mut errors = FieldErrors::new();
        errors.reject("url", ErrorCode::Invalid, "URL is invalid.");
        let outcome = SubmissionOutcome::rejected(errors, false);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["offer_certificate_import"], false);
        assert_eq!(json["errors"]["url"][0]["message"], "URL is invalid.");
    }
}
