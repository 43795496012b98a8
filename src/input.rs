use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value uploaded for one document key: a raw count or the list of uploaded items
#[derive(Debug, Clone, PartialEq)]
pub enum CountOrList {
    Count(u32),
    /// Opaque upload records, only the length is read
    Items(Vec<Value>),
    /// Any shape that is neither a non-negative integer nor a list
    Ignored,
}

impl CountOrList {
    /// Decode a JSON value, falling back to `Ignored` for unsupported shapes
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => CountOrList::Items(items.clone()),
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    return CountOrList::Count(u32::try_from(v).unwrap_or(u32::MAX));
                }
                // Whole floats like 3.0 still count; negatives and fractions do not
                match n.as_f64() {
                    Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => {
                        CountOrList::Count(f as u32)
                    }
                    _ => CountOrList::Ignored,
                }
            }
            _ => CountOrList::Ignored,
        }
    }

    /// Resolved count, `None` when the value is ignored
    pub fn resolve(&self) -> Option<u32> {
        match self {
            CountOrList::Count(n) => Some(*n),
            CountOrList::Items(items) => Some(u32::try_from(items.len()).unwrap_or(u32::MAX)),
            CountOrList::Ignored => None,
        }
    }
}

/// Document-type key to count-or-list mapping for one reporting period
///
/// Keys are arbitrary strings; keys outside the category catalog are kept
/// here and ignored by the classifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentCountInput {
    entries: BTreeMap<String, CountOrList>,
}

impl DocumentCountInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from any JSON value; never fails
    ///
    /// `null` and non-object values decode to the empty input.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(map) = value else {
            if !value.is_null() {
                tracing::debug!("document input is not an object, treating as empty");
            }
            return Self::default();
        };

        let entries = map
            .iter()
            .map(|(key, value)| {
                let decoded = CountOrList::from_value(value);
                if decoded == CountOrList::Ignored {
                    tracing::debug!(key = %key, "ignoring unsupported document value");
                }
                (key.clone(), decoded)
            })
            .collect();

        Self { entries }
    }

    /// Parse JSON text; only syntax errors are reported
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Failed to parse document input JSON")?;
        Ok(Self::from_json(&value))
    }

    /// Set a raw count for a key
    pub fn insert_count(&mut self, key: impl Into<String>, count: u32) {
        self.entries.insert(key.into(), CountOrList::Count(count));
    }

    /// Set the uploaded items for a key
    pub fn insert_items(&mut self, key: impl Into<String>, items: Vec<Value>) {
        self.entries.insert(key.into(), CountOrList::Items(items));
    }

    pub fn get(&self, key: &str) -> Option<&CountOrList> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountOrList)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for DocumentCountInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}
