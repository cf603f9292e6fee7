//! The diff result schema.
//!
//! Every comparison produces these types and nothing else. They are created
//! fresh per invocation, immutable once returned, and serialize to a stable
//! textual form so reports can themselves be diffed or snapshot-tested.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;

/// How an entry (or field) changed between the old and new snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::Unchanged => f.write_str("unchanged"),
            ChangeType::Added => f.write_str("added"),
            ChangeType::Removed => f.write_str("removed"),
            ChangeType::Modified => f.write_str("modified"),
        }
    }
}

/// A single field-level change on a matched entry.
///
/// Only `Unchanged` and `Modified` appear here; field sets are stable
/// within a record type, so fields are never added or removed. In practice
/// only `Modified` changes are emitted — unchanged fields are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChange {
    /// The field name (dotted for nested structures, flat today).
    pub path: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub change_type: ChangeType,
}

impl PropertyChange {
    /// A modified field with its old and new values.
    pub fn modified(
        path: impl Into<String>,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            old_value,
            new_value,
            change_type: ChangeType::Modified,
        }
    }
}

/// One record's classification in a diff report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDiff {
    /// Rendered form of the record's comparison key.
    pub key: String,
    pub record_type: String,
    pub change_type: ChangeType,
    /// Non-empty exactly when `change_type` is `Modified`.
    pub property_changes: Vec<PropertyChange>,
}

impl EntryDiff {
    /// An entry present on both sides with no field changes.
    pub fn unchanged(key: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            record_type: record_type.into(),
            change_type: ChangeType::Unchanged,
            property_changes: Vec::new(),
        }
    }

    /// An entry present only in the new snapshot.
    pub fn added(key: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            record_type: record_type.into(),
            change_type: ChangeType::Added,
            property_changes: Vec::new(),
        }
    }

    /// An entry present only in the old snapshot.
    pub fn removed(key: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            record_type: record_type.into(),
            change_type: ChangeType::Removed,
            property_changes: Vec::new(),
        }
    }

    /// Classify a matched entry from its field-level changes: `Unchanged`
    /// when the list is empty, `Modified` otherwise. This constructor is
    /// what keeps the modified-iff-changes invariant true by construction.
    pub fn from_changes(
        key: impl Into<String>,
        record_type: impl Into<String>,
        property_changes: Vec<PropertyChange>,
    ) -> Self {
        let change_type = if property_changes.is_empty() {
            ChangeType::Unchanged
        } else {
            ChangeType::Modified
        };
        Self {
            key: key.into(),
            record_type: record_type.into(),
            change_type,
            property_changes,
        }
    }
}

/// The result of comparing two collections of records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSetDiff {
    /// One entry per record across both inputs, in deterministic order:
    /// old-side input order first, then new-only keys in new-side order.
    pub entries: Vec<EntryDiff>,
    /// Recoverable problems encountered while matching.
    pub diagnostics: Vec<Diagnostic>,
}

impl DataSetDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if any entry is something other than `Unchanged`.
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.change_type != ChangeType::Unchanged)
    }

    fn count(&self, change_type: ChangeType) -> usize {
        self.entries
            .iter()
            .filter(|e| e.change_type == change_type)
            .count()
    }

    // Counts are views over `entries`, never stored, so they cannot drift.

    /// Number of `Added` entries.
    pub fn added_count(&self) -> usize {
        self.count(ChangeType::Added)
    }

    /// Number of `Removed` entries.
    pub fn removed_count(&self) -> usize {
        self.count(ChangeType::Removed)
    }

    /// Number of `Modified` entries.
    pub fn modified_count(&self) -> usize {
        self.count(ChangeType::Modified)
    }

    /// Number of `Unchanged` entries.
    pub fn unchanged_count(&self) -> usize {
        self.count(ChangeType::Unchanged)
    }
}

/// A full project comparison: metadata changes plus the merged dataset diff.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDiff {
    /// Changes to top-level project metadata fields.
    pub property_changes: Vec<PropertyChange>,
    /// Entry diffs across every record type, plus accumulated diagnostics.
    pub data: DataSetDiff,
}

impl ProjectDiff {
    /// Returns `true` if neither metadata nor any dataset changed.
    pub fn is_clean(&self) -> bool {
        self.property_changes.is_empty() && !self.data.has_changes()
    }
}
