use serde::Serialize;

use crate::schema::schema_model::AliasTable;
use crate::text::normalize::normalize_label;

/// Which tier of the resolver produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Normalized,
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub key: &'static str,
    pub tier: MatchTier,
}

/// Resolve one raw label to a canonical field key.
///
/// Tiers, first success wins:
/// 1. exact string equality with a declared alias
/// 2. equality after normalization
/// 3. substring containment in either direction between the normalized
///    label and a normalized alias, scanning in declaration order
///
/// A label that normalizes to nothing never matches.
pub fn resolve_field(raw_label: &str, aliases: AliasTable) -> Option<FieldMatch> {
    if let Some(hit) = aliases.iter().find(|a| a.label == raw_label) {
        return Some(FieldMatch {
            key: hit.key,
            tier: MatchTier::Exact,
        });
    }

    let wanted = normalize_label(raw_label);
    if wanted.is_empty() {
        return None;
    }

    let normalized: Vec<(String, &'static str)> = aliases
        .iter()
        .map(|a| (normalize_label(a.label), a.key))
        .collect();

    if let Some((_, key)) = normalized.iter().find(|(label, _)| *label == wanted) {
        return Some(FieldMatch {
            key: *key,
            tier: MatchTier::Normalized,
        });
    }

    normalized
        .iter()
        .filter(|(label, _)| !label.is_empty())
        .find(|(label, _)| wanted.contains(label.as_str()) || label.contains(wanted.as_str()))
        .map(|(_, key)| FieldMatch {
            key: *key,
            tier: MatchTier::Substring,
        })
}

/// Convenience wrapper returning only the key.
pub fn resolve_key(raw_label: &str, aliases: AliasTable) -> Option<&'static str> {
    resolve_field(raw_label, aliases).map(|m| m.key)
}
