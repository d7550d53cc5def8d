use std::collections::HashMap;

use serde_json::Value;

/// What a null turns into when stringified by the store's older tooling.
/// A resolution that lands on this text collapses to the empty string so it
/// can never satisfy a substring check downstream.
const NULL_SENTINEL: &str = "None";

/// Stringify a scalar the way lookup keys are stored: strings unquoted,
/// numbers and booleans via their display form. Nulls and composites have no
/// key.
pub(crate) fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read-only id -> name table built once per audit run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceMap {
    entries: HashMap<String, String>,
}

impl ReferenceMap {
    /// Build the table from (id, name) pairs. Duplicate ids are last-write-wins
    /// and an empty input yields an empty map; unkeyable ids are dropped.
    pub fn new(pairs: impl IntoIterator<Item = (Value, String)>) -> Self {
        let entries = pairs
            .into_iter()
            .filter_map(|(id, name)| scalar_key(&id).map(|key| (key, name)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a foreign-key-style reference to a display name.
    ///
    /// Absent or null references resolve to the empty string before any
    /// lookup. An id missing from the table degrades to its raw stringified
    /// form rather than failing, and a result equal to [`NULL_SENTINEL`]
    /// collapses to the empty string.
    pub fn resolve(&self, reference: Option<&Value>) -> String {
        let key = match reference.and_then(scalar_key) {
            Some(key) => key,
            None => return String::new(),
        };

        let resolved = self.entries.get(&key).cloned().unwrap_or(key);
        if resolved == NULL_SENTINEL {
            String::new()
        } else {
            resolved
        }
    }
}
