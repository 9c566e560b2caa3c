use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Caller-owned form state: one read accessor, one setter
// ============================================================================

/// Point-in-time copy of the live form values, keyed by canonical field key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot(pub HashMap<String, Value>);

impl FormSnapshot {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Empty means missing, null, a zero-length string or an empty list.
    pub fn is_empty_at(&self, key: &str) -> bool {
        self.get(key).is_none_or(is_empty_value)
    }
}

pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Access to a live form. The engine reads through `snapshot` exactly once
/// per session and writes through `apply` exactly once.
pub trait FormState {
    fn snapshot(&self) -> FormSnapshot;
    fn apply(&mut self, writes: &IndexMap<String, Value>);
    /// Reset every value to empty.
    fn clear(&mut self);
}

// ============================================================================
// InMemoryForm: plain JSON-backed form, used by the CLI and tests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryForm {
    values: IndexMap<String, Value>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Direct edit, as a user typing into a field would do.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }
}

impl FormState for InMemoryForm {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    fn apply(&mut self, writes: &IndexMap<String, Value>) {
        for (key, value) in writes {
            self.values.insert(key.clone(), value.clone());
        }
    }

    fn clear(&mut self) {
        for value in self.values.values_mut() {
            *value = Value::Null;
        }
    }
}
