use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::merge::form_state::{FormSnapshot, FormState};
use crate::resolve::pipeline::ResolvedField;

/// Whether a session may replace values that are already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Write only into empty fields.
    #[default]
    FillEmptyOnly,
    /// Write every validated candidate.
    Overwrite,
}

impl MergePolicy {
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            MergePolicy::Overwrite
        } else {
            MergePolicy::FillEmptyOnly
        }
    }
}

/// Finalized write set plus the keys it touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeOutcome {
    pub writes: IndexMap<String, Value>,
    pub written: BTreeSet<String>,
    /// Candidates held back because the field already had a value.
    pub kept_existing: Vec<&'static str>,
}

impl MergeOutcome {
    pub fn populated(&self) -> usize {
        self.written.len()
    }
}

/// Decide which candidates may be written against `snapshot`. Pure.
pub fn plan_merge(
    snapshot: &FormSnapshot,
    candidates: &[ResolvedField],
    policy: MergePolicy,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for candidate in candidates {
        let allowed = match policy {
            MergePolicy::Overwrite => true,
            MergePolicy::FillEmptyOnly => snapshot.is_empty_at(candidate.key),
        };

        if !allowed {
            outcome.kept_existing.push(candidate.key);
            continue;
        }

        outcome
            .writes
            .insert(candidate.key.to_string(), candidate.value.to_json());
        outcome.written.insert(candidate.key.to_string());
    }

    outcome
}

/// Snapshot `form` once, plan the merge, and push the writes through the
/// form's setter in a single call. The only step with a side effect.
pub fn apply_merge<F: FormState + ?Sized>(
    form: &mut F,
    candidates: &[ResolvedField],
    policy: MergePolicy,
) -> MergeOutcome {
    let snapshot = form.snapshot();
    let outcome = plan_merge(&snapshot, candidates, policy);

    if !outcome.writes.is_empty() {
        form.apply(&outcome.writes);
    }

    outcome
}
