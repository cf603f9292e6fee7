//! The record value object: a mapping of field name to nullable string value.
//!
//! Records carry no behavior beyond field storage. All comparison semantics
//! (which fields matter, in what order, what counts as identity) live in the
//! schema and the engine, so a `Record` can back any record type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single equipment or calculation-result record.
///
/// Field values are kept as the original source strings; a field can be
/// present-but-null (`None`), present with a value, or absent entirely.
/// Absent and null read the same through [`Record::get`] — the distinction
/// only matters for schema-mismatch checks, which look at which field
/// *names* a record exposes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, Option<String>>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs. All values are non-null.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Builder-style setter for a null value.
    pub fn with_null(mut self, field: impl Into<String>) -> Self {
        self.set(field, None);
        self
    }

    /// Set a field to a value (or null).
    pub fn set(&mut self, field: impl Into<String>, value: Option<String>) {
        self.values.insert(field.into(), value);
    }

    /// The value of a field. Absent and null fields both read as `None`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|v| v.as_deref())
    }

    /// Returns `true` if the field is absent, null, or holds only whitespace.
    pub fn is_blank(&self, field: &str) -> bool {
        match self.get(field) {
            Some(value) => value.trim().is_empty(),
            None => true,
        }
    }

    /// The field names this record exposes, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of fields the record exposes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the record exposes no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
