//! Field-attributed validation errors
//!
//! The submission workflow runs several independent checks, more than one of
//! which can fail on the same candidate. [`FieldErrors`] is the explicit
//! mutable collector those checks write into; the caller gets every problem
//! back at once, keyed by input field, in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification of a field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Field is blank or missing
    Required,
    /// Value collides with an existing record
    Taken,
    /// Value does not resolve or failed verification
    Invalid,
    /// Value exceeds the configured length cap
    TooLong,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Required => "REQUIRED",
            Self::Taken => "TAKEN",
            Self::Invalid => "INVALID",
            Self::TooLong => "TOO_LONG",
        };
        f.write_str(s)
    }
}

/// A single validation message attached to an input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Failure classification
    pub code: ErrorCode,
    /// Human-readable message for redisplay
    pub message: String,
}

impl FieldError {
    /// Create a field error
    #[inline]
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Insertion-ordered collector of field-attributed validation errors
///
/// Checks append with [`reject`](Self::reject); collaborators such as the
/// endpoint verifier use the same collector as their error side channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    entries: IndexMap<String, Vec<FieldError>>,
}

impl FieldErrors {
    /// Create an empty collector
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation failure against a field
    pub fn reject(&mut self, field: &str, code: ErrorCode, message: impl Into<String>) {
        self.entries
            .entry(field.to_string())
            .or_default()
            .push(FieldError::new(code, message));
    }

    /// Whether any error has been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded errors across all fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the given field has at least one error
    #[inline]
    #[must_use]
    pub fn has_field_errors(&self, field: &str) -> bool {
        self.entries.get(field).is_some_and(|v| !v.is_empty())
    }

    /// First error recorded against the given field
    #[inline]
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.entries.get(field).and_then(|v| v.first())
    }

    /// Whether the given field carries an error with the given code
    #[must_use]
    pub fn contains(&self, field: &str, code: ErrorCode) -> bool {
        self.entries
            .get(field)
            .is_some_and(|v| v.iter().any(|e| e.code == code))
    }

    /// Messages recorded against the given field, in insertion order
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.entries
            .get(field)
            .map(|v| v.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }

    /// Iterate over (field, errors) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Field names that carry errors, in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collector_is_empty() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn reject_records_field_error() {
        let mut errors = FieldErrors::new();
        errors.reject("name", ErrorCode::Required, "This field cannot be blank");

        assert!(!errors.is_empty());
        assert!(errors.has_field_errors("name"));
        assert!(errors.contains("name", ErrorCode::Required));
        assert!(!errors.contains("name", ErrorCode::Taken));
        assert!(!errors.has_field_errors("url"));
    }

    #[test]
    fn multiple_errors_on_one_field_accumulate() {
        let mut errors = FieldErrors::new();
        errors.reject("name", ErrorCode::TooLong, "Maximum length is 50.");
        errors.reject("name", ErrorCode::Taken, "That name is already taken.");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.messages("name"),
            vec!["Maximum length is 50.", "That name is already taken."]
        );
        // first error wins for field_error()
        assert_eq!(errors.field_error("name").unwrap().code, ErrorCode::TooLong);
    }

    #[test]
    fn fields_preserve_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.reject("url", ErrorCode::Invalid, "URL is invalid.");
        errors.reject("name", ErrorCode::Required, "This field cannot be blank");
        errors.reject("type_id", ErrorCode::Invalid, "Defect Tracker Type is invalid.");

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["url", "name", "type_id"]);
    }

    #[test]
    fn serializes_as_field_to_message_map() {
        let mut errors = FieldErrors::new();
        errors.reject("name", ErrorCode::Required, "This field cannot be blank");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json["name"][0]["code"],
            serde_json::Value::String("REQUIRED".to_string())
        );
        assert_eq!(
            json["name"][0]["message"],
            serde_json::Value::String("This field cannot be blank".to_string())
        );
    }

    #[test]
    fn field_error_on_missing_field_is_none() {
        let errors = FieldErrors::new();
        assert!(errors.field_error("url").is_none());
        assert!(errors.messages("url").is_empty());
    }
}
