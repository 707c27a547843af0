//! End-to-end submission scenarios
//!
//! Drives the full workflow against the in-memory store: every rejection
//! path, the certificate-remediation flag, and the persist-exactly-once
//! guarantees.

use std::sync::Arc;

use proptest::prelude::*;

use deftrack_core::{FixedPrincipal, SubmissionWorkflow, TypeRegistry, WorkflowConfig};
use deftrack_domain::{ErrorCode, SubmissionOutcome, TrackerCandidate, TypeId};
use deftrack_store::{InMemoryTrackerStore, TrackerStore};
use deftrack_test_utils::{
    setup_scripted_workflow, setup_workflow, valid_candidate, ScriptedVerifier, Verdict,
};
use deftrack_verify::UNTRUSTED_CERTIFICATE;

fn init_logging() {
    deftrack_core::telemetry::init();
}

#[test]
fn all_empty_candidate_reports_name_and_type() {
    init_logging();
    let (workflow, store) = setup_workflow();

    let outcome = workflow
        .submit(TrackerCandidate::new("", None, ""))
        .unwrap();

    let errors = outcome.errors().unwrap();
    assert!(errors.contains("name", ErrorCode::Required));
    assert!(errors.contains("type_id", ErrorCode::Invalid));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn valid_submission_is_created_with_identifier() {
    let (workflow, store) = setup_workflow();

    let outcome = workflow
        .submit(TrackerCandidate::new(
            "Tracker1",
            Some(TypeId(1)),
            "https://good",
        ))
        .unwrap();

    let record = outcome.created_record().unwrap();
    assert!(!record.id.to_string().is_empty());
    assert_eq!(record.name, "Tracker1");
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.all().unwrap()[0].name, "Tracker1");
}

#[test]
fn resubmitting_identical_payload_is_name_taken() {
    let (workflow, store) = setup_workflow();
    let payload = TrackerCandidate::new("Tracker1", Some(TypeId(1)), "https://good");

    assert!(workflow.submit(payload.clone()).unwrap().is_created());

    let second = workflow.submit(payload).unwrap();
    assert!(second.errors().unwrap().contains("name", ErrorCode::Taken));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn taken_name_is_reported_regardless_of_other_field_validity() {
    let (workflow, store) = setup_workflow();
    assert!(workflow.submit(valid_candidate("Tracker1")).unwrap().is_created());

    // same name, bogus type and url: the name collision still surfaces
    let outcome = workflow
        .submit(TrackerCandidate::new("Tracker1", Some(TypeId(99)), "junk"))
        .unwrap();

    let errors = outcome.errors().unwrap();
    assert!(errors.contains("name", ErrorCode::Taken));
    assert!(errors.contains("type_id", ErrorCode::Invalid));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn name_collision_matches_trimmed_exact_case() {
    let (workflow, store) = setup_workflow();
    assert!(workflow.submit(valid_candidate("Tracker1")).unwrap().is_created());

    // surrounding whitespace trims to the same name
    let padded = workflow
        .submit(TrackerCandidate::new(
            "  Tracker1  ",
            Some(TypeId(1)),
            "https://good",
        ))
        .unwrap();
    assert!(padded.errors().unwrap().contains("name", ErrorCode::Taken));

    // case differs: no collision
    let cased = workflow
        .submit(TrackerCandidate::new(
            "tracker1",
            Some(TypeId(1)),
            "https://good",
        ))
        .unwrap();
    assert!(cased.is_created());
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn unresolvable_type_never_reaches_the_verifier() {
    let verifier = ScriptedVerifier::shared([Verdict::Pass]);
    let (workflow, store) = setup_scripted_workflow(verifier.clone());

    let outcome = workflow
        .submit(TrackerCandidate::new(
            "Tracker1",
            Some(TypeId(42)),
            "https://good",
        ))
        .unwrap();

    assert!(outcome.errors().unwrap().contains("type_id", ErrorCode::Invalid));
    assert_eq!(verifier.calls(), 0);
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn missing_type_never_reaches_the_verifier() {
    let verifier = ScriptedVerifier::shared([Verdict::Pass]);
    let (workflow, _store) = setup_scripted_workflow(verifier.clone());

    let outcome = workflow
        .submit(TrackerCandidate::new("Tracker1", None, "https://good"))
        .unwrap();

    assert!(outcome.is_rejected());
    assert_eq!(verifier.calls(), 0);
}

#[test]
fn bare_verifier_failure_gets_the_generic_message() {
    let verifier = ScriptedVerifier::shared([Verdict::Fail]);
    let (workflow, store) = setup_scripted_workflow(verifier);

    let outcome = workflow.submit(valid_candidate("Tracker1")).unwrap();

    let errors = outcome.errors().unwrap();
    assert_eq!(errors.messages("url"), vec!["URL is invalid."]);
    assert!(!outcome.offers_certificate_import());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn untrusted_certificate_offers_import_without_duplicate_error() {
    let verifier = ScriptedVerifier::shared([Verdict::UntrustedCertificate]);
    let (workflow, store) = setup_scripted_workflow(verifier);

    let outcome = workflow.submit(valid_candidate("Tracker1")).unwrap();

    assert!(outcome.offers_certificate_import());
    let errors = outcome.errors().unwrap();
    assert_eq!(errors.messages("url"), vec![UNTRUSTED_CERTIFICATE]);
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn verifier_specific_failure_is_preserved() {
    let verifier =
        ScriptedVerifier::shared([Verdict::FieldError("Connection refused.".to_string())]);
    let (workflow, _store) = setup_scripted_workflow(verifier);

    let outcome = workflow.submit(valid_candidate("Tracker1")).unwrap();

    let errors = outcome.errors().unwrap();
    assert_eq!(errors.messages("url"), vec!["Connection refused."]);
    assert!(!outcome.offers_certificate_import());
}

#[test]
fn overlong_name_is_rejected_with_length_message() {
    let (workflow, store) = setup_workflow();

    let outcome = workflow.submit(valid_candidate(&"x".repeat(51))).unwrap();

    let errors = outcome.errors().unwrap();
    assert!(errors.contains("name", ErrorCode::TooLong));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn https_requirement_applies_when_configured() {
    let store = InMemoryTrackerStore::shared();
    let workflow = SubmissionWorkflow::with_stock_verifier(
        WorkflowConfig::new().with_require_https(true),
        TypeRegistry::with_defaults(),
        store.clone(),
        Arc::new(FixedPrincipal::new("tester")),
    );

    let outcome = workflow
        .submit(TrackerCandidate::new(
            "Tracker1",
            Some(TypeId(1)),
            "http://plain.example.com",
        ))
        .unwrap();

    let errors = outcome.errors().unwrap();
    assert!(errors.has_field_errors("url"));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn rejected_outcome_serializes_to_failure_envelope() {
    use pretty_assertions::assert_eq;

    let (workflow, _store) = setup_workflow();
    let outcome = workflow
        .submit(TrackerCandidate::new("", None, ""))
        .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["offer_certificate_import"], false);
    assert_eq!(
        json["errors"]["name"][0]["message"],
        "This field cannot be blank"
    );
}

#[test]
fn created_outcome_serializes_to_success_envelope() {
    let (workflow, _store) = setup_workflow();
    let outcome = workflow.submit(valid_candidate("Tracker1")).unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "created");
    assert_eq!(json["tracker"]["name"], "Tracker1");
    assert!(json["tracker"]["id"].is_string());
}

proptest! {
    #[test]
    fn prop_whitespace_only_names_are_always_rejected(ws in "[ \t\r\n]{0,12}") {
        let (workflow, store) = setup_workflow();
        let outcome = workflow
            .submit(TrackerCandidate::new(ws, Some(TypeId(1)), "https://good"))
            .unwrap();

        prop_assert!(
            matches!(outcome, SubmissionOutcome::Rejected { .. }),
            "expected Rejected outcome"
        );
        prop_assert!(outcome.errors().unwrap().contains("name", ErrorCode::Required));
        prop_assert_eq!(store.count().unwrap(), 0);
    }
}
