mod common;

use common::{conference_options, today};
use record_autofill::coerce::value::RawValue;
use record_autofill::extract::extract_model::{DocumentRef, ExtractionResult};
use record_autofill::extract::extractor::{DocumentExtractor, MockExtractor, UnavailableExtractor};
use record_autofill::extract::http::HttpExtractor;
use record_autofill::merge::form_state::InMemoryForm;
use record_autofill::resolve::pipeline::ResolveContext;
use record_autofill::schema::form_type::FormTypeId;
use record_autofill::session::controller::AutoFillController;
use record_autofill::trace::logger::TraceLogger;
use record_autofill::AutofillError;
use serde_json::{json, Value};

// ============================================================================
// ExtractionResult parsing
// ============================================================================

#[test]
fn flat_object_keeps_label_order() {
    let extraction = ExtractionResult::from_json_str(
        r#"{"Venue": "Delhi", "Authors": "A, B", "Date": "2023-01-01"}"#,
    )
    .unwrap();

    let labels: Vec<&str> = extraction.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["Venue", "Authors", "Date"]);
}

#[test]
fn fields_wrapper_is_unwrapped() {
    let extraction = ExtractionResult::from_json(json!({
        "fields": {"Title": "On Things", "Year": 2021},
        "confidence": 0.93
    }))
    .unwrap();

    assert_eq!(extraction.len(), 2);
    assert_eq!(extraction.get("Title"), Some(&RawValue::from("On Things")));
    assert_eq!(extraction.get("Year"), Some(&RawValue::from(2021i64)));
    assert!(extraction.get("confidence").is_none());
}

#[test]
fn fields_label_with_scalar_value_is_a_plain_label() {
    let extraction = ExtractionResult::from_json(json!({"fields": "Physics", "Venue": "Pune"})).unwrap();

    assert_eq!(extraction.len(), 2);
    assert_eq!(extraction.get("fields"), Some(&RawValue::from("Physics")));
}

#[test]
fn non_object_response_is_rejected() {
    let err = ExtractionResult::from_json(json!(["Venue", "Delhi"])).unwrap_err();
    assert!(matches!(err, AutofillError::ExtractionShape(_)));

    let err = ExtractionResult::from_json_str("not json").unwrap_err();
    assert!(matches!(err, AutofillError::Json { .. }));
}

#[test]
fn non_scalar_values_become_absent() {
    let extraction = ExtractionResult::from_json(json!({
        "Venue": null,
        "Authors": ["A", "B"],
        "Meta": {"k": 1},
        "Peer Reviewed": true,
        "Pages": 12
    }))
    .unwrap();

    assert!(extraction.get("Venue").unwrap().is_absent());
    assert!(extraction.get("Authors").unwrap().is_absent());
    assert!(extraction.get("Meta").unwrap().is_absent());
    assert_eq!(extraction.get("Peer Reviewed"), Some(&RawValue::Text("true".into())));
    assert_eq!(extraction.get("Pages").unwrap().as_text().as_deref(), Some("12"));
}

#[test]
fn deserializes_through_serde() {
    let extraction: ExtractionResult =
        serde_json::from_str(r#"{"Fee": "1,500", "Mode": 10, "Missing": null}"#).unwrap();

    assert_eq!(extraction.len(), 3);
    assert_eq!(extraction.get("Fee"), Some(&RawValue::from("1,500")));
    assert!(extraction.get("Missing").unwrap().is_absent());

    let back: Value = serde_json::to_value(&extraction).unwrap();
    assert_eq!(back, json!({"Fee": "1,500", "Mode": 10, "Missing": null}));
}

#[test]
fn fingerprint_tracks_content_and_order() {
    let a = ExtractionResult::new().with("Venue", "Delhi").with("Fee", 100i64);
    let same = ExtractionResult::new().with("Venue", "Delhi").with("Fee", 100i64);
    let reordered = ExtractionResult::new().with("Fee", 100i64).with("Venue", "Delhi");
    let changed = ExtractionResult::new().with("Venue", "Mumbai").with("Fee", 100i64);

    assert_eq!(a.fingerprint(), same.fingerprint());
    assert_ne!(a.fingerprint(), reordered.fingerprint());
    assert_ne!(a.fingerprint(), changed.fingerprint());
    assert_eq!(a.fingerprint().len(), 40);
    assert!(!a.fingerprint().contains("Delhi"));
}

#[test]
fn collects_from_pairs() {
    let extraction: ExtractionResult = vec![
        ("Venue".to_string(), RawValue::from("Delhi")),
        ("Organizer".to_string(), RawValue::from("IEEE")),
    ]
    .into_iter()
    .collect();

    assert_eq!(extraction.len(), 2);
    assert!(!extraction.is_empty());
}

// ============================================================================
// Documents and extractors
// ============================================================================

#[test]
fn document_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("certificate.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let document = DocumentRef::load(&path).unwrap();
    assert_eq!(document.file_name, "certificate.pdf");
    assert_eq!(document.bytes, b"%PDF-1.4".to_vec());
}

#[test]
fn missing_document_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DocumentRef::load(&dir.path().join("nope.pdf")).unwrap_err();
    assert!(matches!(err, AutofillError::Io { .. }));
}

#[test]
fn mock_extractor_returns_canned_result() {
    let canned = ExtractionResult::new().with("Venue", "Delhi");
    let extractor = MockExtractor::new(canned.clone());
    let document = DocumentRef::new("a.pdf", Vec::new());

    assert_eq!(extractor.extract(&document).unwrap(), canned);
    assert_eq!(extractor.extract(&document).unwrap(), canned);
}

#[test]
fn unavailable_extractor_reports_status() {
    let err = UnavailableExtractor
        .extract(&DocumentRef::new("a.pdf", Vec::new()))
        .unwrap_err();
    assert!(matches!(err, AutofillError::ExtractionStatus { status: 503, .. }));
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let extractor = HttpExtractor::new("http://127.0.0.1:9/analyze", 2);
    let err = extractor
        .extract(&DocumentRef::new("a.pdf", b"x".to_vec()))
        .unwrap_err();

    match err {
        AutofillError::ExtractionTransport { endpoint, .. } => {
            assert_eq!(endpoint, "http://127.0.0.1:9/analyze");
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

// ============================================================================
// Session trace
// ============================================================================

#[test]
fn trace_lines_carry_counts_not_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.jsonl");
    let tracer = TraceLogger::new(path.to_str().unwrap());
    assert!(tracer.is_enabled());

    let options = conference_options();
    let ctx = ResolveContext { options: &options, today: today() };
    let mut form = InMemoryForm::new().with("organizer", "IEEE");
    let mut controller = AutoFillController::new(tracer);

    let ticket = controller.begin_for(FormTypeId::ConferencePresentation);
    controller.complete_extraction(
        ticket,
        ExtractionResult::new()
            .with("Venue", "Secret Venue")
            .with("Organizer", "ACM")
            .with("Level", "Galactic")
            .with("Zzz", "x"),
        &ctx,
        &mut form,
    );

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("Secret Venue"));

    let events: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["state"], "Extracting");
    assert_eq!(events[0]["form_type"], "conference_presentation");

    let merged = &events[1];
    assert_eq!(merged["state"], "Merged");
    assert_eq!(merged["session"], 1);
    assert_eq!(merged["populated"], 1);
    assert_eq!(merged["unresolved"], 1);
    assert_eq!(merged["rejected"], 1);
    assert_eq!(merged["kept_existing"], 1);
    assert!(merged["extraction_fingerprint"].is_string());
}

#[test]
fn stale_results_are_traced_as_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.jsonl");
    let options = conference_options();
    let ctx = ResolveContext { options: &options, today: today() };
    let mut form = InMemoryForm::new();
    let mut controller = AutoFillController::new(TraceLogger::new(path.to_str().unwrap()));

    let old = controller.begin_for(FormTypeId::ConferencePresentation);
    controller.cancel();
    controller.complete_extraction(old, ExtractionResult::new().with("Venue", "Delhi"), &ctx, &mut form);

    let text = std::fs::read_to_string(&path).unwrap();
    let last: Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
    assert_eq!(last["discard_reason"], "superseded");
    assert_eq!(last["session"], 1);
}

#[test]
fn unopenable_trace_path_disables_tracing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("trace.jsonl");
    let tracer = TraceLogger::new(path.to_str().unwrap());
    assert!(!tracer.is_enabled());
}
