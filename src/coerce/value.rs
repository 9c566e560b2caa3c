use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ============================================================================
// Raw values (untrusted, as delivered by the extraction service)
// ============================================================================

/// A scalar from an extraction result. Anything that is not text or a number
/// is treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Absent,
}

impl RawValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }

    /// Text view of the value; numbers render the way JSON writes them.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Number(n) => Some(n.to_string()),
            RawValue::Absent => None,
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RawValue::Text(s),
            Value::Number(n) => RawValue::Number(n),
            Value::Bool(b) => RawValue::Text(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => RawValue::Absent,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n.into())
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?.into())
    }
}

impl Serialize for RawValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawValue::Text(s) => serializer.serialize_str(s),
            RawValue::Number(n) => n.serialize(serializer),
            RawValue::Absent => serializer.serialize_none(),
        }
    }
}

// ============================================================================
// Coerced values (validated, ready to be written into a form)
// ============================================================================

/// A value that passed its kind's validator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Date(NaiveDate),
    /// Id of a member of the field's dropdown option set.
    Choice(i64),
    Url(String),
    Year(u16),
}

impl FieldValue {
    /// JSON form handed to the form setter. Dates are `YYYY-MM-DD`.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) | FieldValue::Url(s) => Value::String(s.clone()),
            FieldValue::Number(n) => Value::Number(n.clone()),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::Choice(id) => Value::from(*id),
            FieldValue::Year(y) => Value::from(*y),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Url(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Choice(id) => write!(f, "{}", id),
            FieldValue::Year(y) => write!(f, "{}", y),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
