//! The submission workflow
//!
//! Validates a candidate tracker configuration, persists it if every check
//! passes, and returns a structured outcome. Checks accumulate into the
//! field-error collector so the caller sees every problem at once; the only
//! ordering constraint is that endpoint verification runs only after the
//! tracker type resolved.

use std::sync::Arc;

use crate::config::WorkflowConfig;
use crate::error::SubmissionError;
use crate::principal::PrincipalContext;
use crate::registry::TypeRegistry;
use deftrack_domain::{
    ErrorCode, FieldErrors, NewTracker, SubmissionOutcome, TrackerCandidate, TrackerType,
};
use deftrack_store::{StoreError, TrackerStore};
use deftrack_verify::{EndpointVerifier, UrlSyntaxVerifier, UNTRUSTED_CERTIFICATE};

/// Validates and persists tracker configuration submissions
///
/// Owns the type registry and reaches persistence, endpoint verification
/// and principal identity through injected collaborators.
pub struct SubmissionWorkflow {
    config: WorkflowConfig,
    registry: TypeRegistry,
    store: Arc<dyn TrackerStore>,
    verifier: Arc<dyn EndpointVerifier>,
    principal: Arc<dyn PrincipalContext>,
}

impl SubmissionWorkflow {
    /// Create a workflow with default configuration
    #[must_use]
    pub fn new(
        registry: TypeRegistry,
        store: Arc<dyn TrackerStore>,
        verifier: Arc<dyn EndpointVerifier>,
        principal: Arc<dyn PrincipalContext>,
    ) -> Self {
        Self {
            config: WorkflowConfig::default(),
            registry,
            store,
            verifier,
            principal,
        }
    }

    /// Create a workflow using the stock syntax verifier selected by `config`
    #[must_use]
    pub fn with_stock_verifier(
        config: WorkflowConfig,
        registry: TypeRegistry,
        store: Arc<dyn TrackerStore>,
        principal: Arc<dyn PrincipalContext>,
    ) -> Self {
        let verifier: Arc<dyn EndpointVerifier> = if config.require_https {
            Arc::new(UrlSyntaxVerifier::https_only())
        } else {
            Arc::new(UrlSyntaxVerifier::new())
        };
        Self {
            config,
            registry,
            store,
            verifier,
            principal,
        }
    }

    /// Override the workflow configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    /// The registry of tracker types this workflow accepts
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Validate and persist a candidate configuration
    ///
    /// Validation failures come back as `Ok(Rejected { .. })` with
    /// field-attributed messages; `Err` is reserved for infrastructure
    /// faults such as an unreachable store. Exactly one store write happens
    /// on the success path and none on any failure path.
    pub fn submit(
        &self,
        candidate: TrackerCandidate,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let mut errors = FieldErrors::new();
        let mut offer_certificate_import = false;

        let name = candidate.trimmed_name();
        if name.is_empty() {
            errors.reject("name", ErrorCode::Required, "This field cannot be blank");
        } else {
            if name.chars().count() > self.config.max_name_len {
                errors.reject(
                    "name",
                    ErrorCode::TooLong,
                    format!("Maximum length is {}.", self.config.max_name_len),
                );
            }
            if self.store.find_by_name(name)?.is_some() {
                errors.reject("name", ErrorCode::Taken, "That name is already taken.");
            }
        }

        let resolved = self.resolve_type(&candidate, &mut errors);

        // The endpoint is only worth checking against a known tracker type.
        if resolved.is_some() && !self.verifier.verify(&candidate, &mut errors) {
            match errors.field_error("url") {
                None => errors.reject("url", ErrorCode::Invalid, "URL is invalid."),
                Some(err) if err.message == UNTRUSTED_CERTIFICATE => {
                    offer_certificate_import = true;
                }
                Some(_) => {}
            }
        }

        let tracker_type = match resolved {
            Some(t) if errors.is_empty() => t,
            _ => {
                tracing::debug!(
                    error_count = errors.len(),
                    offer_certificate_import,
                    "tracker submission rejected"
                );
                return Ok(SubmissionOutcome::rejected(
                    errors,
                    offer_certificate_import,
                ));
            }
        };

        let stored = match self.store.save(NewTracker {
            name: name.to_string(),
            type_id: tracker_type.id,
            type_name: tracker_type.name.clone(),
            url: candidate.url.trim().to_string(),
        }) {
            Ok(record) => record,
            Err(StoreError::NameExists { .. }) => {
                // Lost the race against a concurrent submission: surface the
                // same field error the pre-check would have produced.
                errors.reject("name", ErrorCode::Taken, "That name is already taken.");
                return Ok(SubmissionOutcome::rejected(errors, false));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            user = %self.principal.current_user_name(),
            name = %stored.name,
            url = %stored.url,
            tracker_type = %stored.type_name,
            id = %stored.id,
            "created defect tracker configuration"
        );

        Ok(SubmissionOutcome::created(stored))
    }

    fn resolve_type(
        &self,
        candidate: &TrackerCandidate,
        errors: &mut FieldErrors,
    ) -> Option<TrackerType> {
        match candidate.type_id {
            None => {
                errors.reject(
                    "type_id",
                    ErrorCode::Invalid,
                    "Defect Tracker Type is invalid.",
                );
                None
            }
            Some(id) => match self.registry.resolve(id) {
                None => {
                    errors.reject("type_id", ErrorCode::Invalid, format!("{id} is invalid."));
                    None
                }
                Some(t) => Some(t.clone()),
            },
        }
    }
}
