use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::value::RawValue;
use crate::error::{AutofillError, Result};

// ============================================================================
// Extraction result: label → raw value, in the order the service produced it
// ============================================================================

/// Raw key/value output of the document-understanding service.
///
/// Labels are arbitrary and values untrusted. Insertion order is preserved
/// because it decides which label claims a key when several resolve to the
/// same field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult(IndexMap<String, RawValue>);

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, label: &str, value: impl Into<RawValue>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn insert(&mut self, label: &str, value: impl Into<RawValue>) {
        self.0.insert(label.to_string(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.0.iter()
    }

    pub fn get(&self, label: &str) -> Option<&RawValue> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Accept either a flat `{label: value}` object or one wrapped as
    /// `{"fields": {label: value}}`.
    pub fn from_json(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(mut obj) => {
                if matches!(obj.get("fields"), Some(Value::Object(_))) {
                    match obj.remove("fields") {
                        Some(Value::Object(fields)) => fields,
                        _ => Map::new(),
                    }
                } else {
                    obj
                }
            }
            other => {
                return Err(AutofillError::ExtractionShape(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        Ok(Self(
            map.into_iter()
                .map(|(label, value)| (label, RawValue::from(value)))
                .collect(),
        ))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| AutofillError::json("extraction result", e))?;
        Self::from_json(value)
    }

    /// Stable fingerprint for audit trails; never log the labels themselves.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for (label, value) in &self.0 {
            hasher.update(label.as_bytes());
            hasher.update([0u8]);
            if let Some(text) = value.as_text() {
                hasher.update(text.as_bytes());
            }
            hasher.update([0xffu8]);
        }
        format!("{:x}", hasher.finalize())
    }
}

impl FromIterator<(String, RawValue)> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Document handed to the extraction service
// ============================================================================

/// A document to analyze. The engine never chooses which one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentRef {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| AutofillError::io(PathBuf::from(path), e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Ok(Self { file_name, bytes })
    }
}
