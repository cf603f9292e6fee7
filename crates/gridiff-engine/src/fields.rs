//! Field-level comparison for matched record pairs.
//!
//! Comparison is exact string equality on the original source values. No
//! numeric parsing, no whitespace normalization: "100" and "100.0" differ.
//! That flags formatting-only edits as changes, but it can never report a
//! false match, which is the right trade for audit output.

use gridiff_model::{Record, RecordSchema};

use crate::report::PropertyChange;

/// Compare two matched records field by field.
///
/// Fields are visited in the schema's declared order; identity and
/// scenario fields are skipped (they are the matching key, not content).
/// The result holds only the fields that differ — an empty result means
/// the records are identical.
pub fn diff_fields(schema: &RecordSchema, old: &Record, new: &Record) -> Vec<PropertyChange> {
    diff_named_fields(schema.data_fields(), old, new)
}

/// Compare an explicit field list across two records. Used directly for
/// project metadata, where every field is comparable content.
pub fn diff_named_fields<'a>(
    fields: impl IntoIterator<Item = &'a str>,
    old: &Record,
    new: &Record,
) -> Vec<PropertyChange> {
    let mut changes = Vec::new();

    for field in fields {
        let old_value = present(old.get(field));
        let new_value = present(new.get(field));
        if old_value != new_value {
            changes.push(PropertyChange::modified(
                field,
                old.get(field).map(str::to_string),
                new.get(field).map(str::to_string),
            ));
        }
    }

    changes
}

/// Null and empty both mean "no value" for equality purposes.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
