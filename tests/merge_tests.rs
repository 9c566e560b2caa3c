use std::cell::Cell;
use std::collections::HashMap;

use indexmap::IndexMap;
use record_autofill::coerce::value::FieldValue;
use record_autofill::merge::form_state::{is_empty_value, FormSnapshot, FormState, InMemoryForm};
use record_autofill::merge::policy::{apply_merge, plan_merge, MergePolicy};
use record_autofill::resolve::field_resolver::MatchTier;
use record_autofill::resolve::pipeline::ResolvedField;
use serde_json::{json, Value};

fn candidate(key: &'static str, value: FieldValue) -> ResolvedField {
    ResolvedField {
        key,
        value,
        source_label: key.to_string(),
        tier: MatchTier::Exact,
    }
}

fn candidates() -> Vec<ResolvedField> {
    vec![
        candidate("title_of_paper", FieldValue::Text("From Document".into())),
        candidate("venue", FieldValue::Text("Chennai".into())),
        candidate("mode", FieldValue::Choice(10)),
        candidate("level", FieldValue::Choice(2)),
    ]
}

fn snapshot() -> FormSnapshot {
    let mut values = HashMap::new();
    values.insert("title_of_paper".to_string(), json!("Existing"));
    values.insert("venue".to_string(), json!(""));
    values.insert("mode".to_string(), Value::Null);
    FormSnapshot(values)
}

#[test]
fn empty_values() {
    assert!(is_empty_value(&Value::Null));
    assert!(is_empty_value(&json!("")));
    assert!(is_empty_value(&json!([])));
    assert!(!is_empty_value(&json!(" ")));
    assert!(!is_empty_value(&json!(0)));
    assert!(!is_empty_value(&json!(false)));
}

#[test]
fn fill_empty_only_keeps_existing_values() {
    let outcome = plan_merge(&snapshot(), &candidates(), MergePolicy::FillEmptyOnly);

    assert!(!outcome.writes.contains_key("title_of_paper"));
    assert_eq!(outcome.writes.get("venue"), Some(&json!("Chennai")));
    assert_eq!(outcome.writes.get("mode"), Some(&json!(10)));
    assert_eq!(outcome.writes.get("level"), Some(&json!(2)));
    assert_eq!(outcome.kept_existing, vec!["title_of_paper"]);
    assert_eq!(outcome.populated(), 3);
}

#[test]
fn overwrite_writes_everything() {
    let outcome = plan_merge(&snapshot(), &candidates(), MergePolicy::Overwrite);

    assert_eq!(outcome.writes.get("title_of_paper"), Some(&json!("From Document")));
    assert_eq!(outcome.populated(), 4);
    assert!(outcome.kept_existing.is_empty());
}

#[test]
fn written_keys_mirror_write_set() {
    let outcome = plan_merge(&snapshot(), &candidates(), MergePolicy::FillEmptyOnly);
    let from_writes: Vec<&String> = outcome.writes.keys().collect();
    let mut sorted = from_writes.clone();
    sorted.sort();
    assert_eq!(sorted, outcome.written.iter().collect::<Vec<_>>());
}

#[test]
fn policy_from_flag() {
    assert_eq!(MergePolicy::from_overwrite(true), MergePolicy::Overwrite);
    assert_eq!(MergePolicy::from_overwrite(false), MergePolicy::FillEmptyOnly);
    assert_eq!(MergePolicy::default(), MergePolicy::FillEmptyOnly);
}

// ============================================================================
// Accessor discipline: one read, one write
// ============================================================================

#[derive(Default)]
struct CountingForm {
    inner: InMemoryForm,
    reads: Cell<usize>,
    writes: usize,
}

impl FormState for CountingForm {
    fn snapshot(&self) -> FormSnapshot {
        self.reads.set(self.reads.get() + 1);
        self.inner.snapshot()
    }

    fn apply(&mut self, writes: &IndexMap<String, Value>) {
        self.writes += 1;
        self.inner.apply(writes);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[test]
fn apply_merge_reads_once_and_writes_once() {
    let mut form = CountingForm::default();
    let outcome = apply_merge(&mut form, &candidates(), MergePolicy::FillEmptyOnly);

    assert_eq!(form.reads.get(), 1);
    assert_eq!(form.writes, 1);
    assert_eq!(outcome.populated(), 4);
    assert_eq!(form.inner.get("venue"), Some(&json!("Chennai")));
}

#[test]
fn apply_merge_skips_setter_when_nothing_to_write() {
    let mut form = CountingForm::default();
    form.inner.set("level", 1);

    let only_level = vec![candidate("level", FieldValue::Choice(2))];
    let outcome = apply_merge(&mut form, &only_level, MergePolicy::FillEmptyOnly);

    assert_eq!(outcome.populated(), 0);
    assert_eq!(form.writes, 0);
    assert_eq!(form.inner.get("level"), Some(&json!(1)));
}

#[test]
fn in_memory_clear_empties_every_value() {
    let mut form = InMemoryForm::new().with("venue", "Pune").with("level", 2);
    form.clear();

    assert!(form.snapshot().is_empty_at("venue"));
    assert!(form.snapshot().is_empty_at("level"));
}
