use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One selectable entry of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub id: i64,
    pub name: String,
}

impl DropdownOption {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Ordered option set for a single enumerated field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropdownOptionSet(pub Vec<DropdownOption>);

impl DropdownOptionSet {
    pub fn contains_id(&self, id: i64) -> bool {
        self.0.iter().any(|o| o.id == id)
    }

    /// First option whose name equals `name`, ignoring case and surrounding
    /// whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&DropdownOption> {
        let wanted = name.trim().to_lowercase();
        self.0
            .iter()
            .find(|o| o.name.trim().to_lowercase() == wanted)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DropdownOption>> for DropdownOptionSet {
    fn from(options: Vec<DropdownOption>) -> Self {
        Self(options)
    }
}

/// Option sets supplied by the form owner, keyed by canonical field key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropdownOptions(pub HashMap<String, DropdownOptionSet>);

impl DropdownOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, options: Vec<DropdownOption>) -> Self {
        self.0.insert(key.to_string(), options.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&DropdownOptionSet> {
        self.0.get(key)
    }
}
