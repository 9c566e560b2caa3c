use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::coerce::options::DropdownOptions;
use crate::coerce::validator::{coerce_value, CoercionContext};
use crate::coerce::value::FieldValue;
use crate::extract::extract_model::ExtractionResult;
use crate::resolve::field_resolver::{resolve_field, MatchTier};
use crate::schema::form_type::FormTypeId;

/// Inputs the pure pipeline needs besides the extraction itself.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub options: &'a DropdownOptions,
    /// Evaluation date; later dates are rejected.
    pub today: NaiveDate,
}

/// A candidate that resolved to a key and passed its validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField {
    pub key: &'static str,
    pub value: FieldValue,
    pub source_label: String,
    pub tier: MatchTier,
}

/// Why a raw entry did not become a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum DropReason {
    /// No alias matched the label.
    Unresolved,
    /// The key was already claimed by an earlier label in this extraction.
    Duplicate { key: &'static str },
    /// The value failed the key's validator (or was absent).
    Invalid { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedEntry {
    pub label: String,
    #[serde(flatten)]
    pub reason: DropReason,
}

/// Outcome of resolving one extraction against one form schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub form_type: FormTypeId,
    pub fields: Vec<ResolvedField>,
    pub dropped: Vec<DroppedEntry>,
}

impl Resolution {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn count_dropped(&self, pred: impl Fn(&DropReason) -> bool) -> usize {
        self.dropped.iter().filter(|d| pred(&d.reason)).count()
    }
}

/// Resolve, coerce and validate every entry of `extraction` for `form_type`.
///
/// Entries are processed in extraction order. The first entry for a key
/// that survives validation claims it; later entries for the same key are
/// dropped as duplicates. Pure: reads no form state and writes nothing.
pub fn resolve_extraction(
    form_type: FormTypeId,
    extraction: &ExtractionResult,
    ctx: &ResolveContext<'_>,
) -> Resolution {
    let schema = form_type.schema();
    let mut claimed: HashSet<&'static str> = HashSet::new();
    let mut fields = Vec::new();
    let mut dropped = Vec::new();

    for (label, raw) in extraction.iter() {
        let Some(hit) = resolve_field(label, schema.aliases) else {
            dropped.push(DroppedEntry {
                label: label.clone(),
                reason: DropReason::Unresolved,
            });
            continue;
        };

        if claimed.contains(hit.key) {
            dropped.push(DroppedEntry {
                label: label.clone(),
                reason: DropReason::Duplicate { key: hit.key },
            });
            continue;
        }

        let Some(kind) = schema.kind_of(hit.key) else {
            // Alias pointing outside the schema; treated like no match.
            dropped.push(DroppedEntry {
                label: label.clone(),
                reason: DropReason::Unresolved,
            });
            continue;
        };

        let coercion = CoercionContext {
            today: ctx.today,
            options: ctx.options.get(hit.key),
        };

        match coerce_value(kind, raw, &coercion) {
            Some(value) => {
                claimed.insert(hit.key);
                fields.push(ResolvedField {
                    key: hit.key,
                    value,
                    source_label: label.clone(),
                    tier: hit.tier,
                });
            }
            None => {
                debug!(key = hit.key, kind = kind.name(), "extracted value rejected");
                dropped.push(DroppedEntry {
                    label: label.clone(),
                    reason: DropReason::Invalid { key: hit.key },
                });
            }
        }
    }

    debug!(
        form_type = %form_type,
        resolved = fields.len(),
        dropped = dropped.len(),
        "extraction resolved"
    );

    Resolution {
        form_type,
        fields,
        dropped,
    }
}
