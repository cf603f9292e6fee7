//! Dataset-level aggregation: one record type's full diff report.

use std::collections::{BTreeMap, BTreeSet};

use gridiff_model::{Record, RecordSchema};
use tracing::debug;

use crate::error::{DiffError, DiffResult, Side};
use crate::fields::diff_fields;
use crate::matcher::match_records;
use crate::report::{DataSetDiff, EntryDiff};

/// Compare two collections of one record type.
///
/// Runs the full pipeline: schema check, key matching, per-pair field
/// comparison, and entry assembly. Output order is deterministic — each
/// old-side record yields its entry (`Unchanged`, `Modified`, or
/// `Removed`) at its input position, followed by `Added` entries in
/// new-side order — so identical inputs always produce byte-identical
/// reports.
pub fn diff_dataset(
    schema: &RecordSchema,
    old: &[Record],
    new: &[Record],
) -> DiffResult<DataSetDiff> {
    check_field_sets(schema, Side::Old, old)?;
    check_field_sets(schema, Side::New, new)?;

    let matches = match_records(schema, old, new)?;
    let record_type = schema.record_type();

    // Matched and removed entries interleave in old-side input order.
    let mut by_old_index: BTreeMap<usize, EntryDiff> = BTreeMap::new();

    for pair in &matches.matched {
        let changes = diff_fields(schema, &old[pair.old_index], &new[pair.new_index]);
        by_old_index.insert(
            pair.old_index,
            EntryDiff::from_changes(pair.key.to_string(), record_type, changes),
        );
    }
    for keyed in &matches.old_only {
        by_old_index.insert(
            keyed.index,
            EntryDiff::removed(keyed.key.to_string(), record_type),
        );
    }

    let mut entries: Vec<EntryDiff> = by_old_index.into_values().collect();
    for keyed in &matches.new_only {
        entries.push(EntryDiff::added(keyed.key.to_string(), record_type));
    }

    let diff = DataSetDiff {
        entries,
        diagnostics: matches.diagnostics,
    };

    debug!(
        record_type,
        entries = diff.len(),
        added = diff.added_count(),
        removed = diff.removed_count(),
        modified = diff.modified_count(),
        "dataset diff complete"
    );

    Ok(diff)
}

/// Reject records exposing fields their declared schema does not know.
///
/// Missing fields are fine — they read as null — but an unexpected field
/// name means the two sides were exported against different schema
/// versions, and a partial comparison would be misleading. The first
/// offender is reported and the comparison fails.
fn check_field_sets(schema: &RecordSchema, side: Side, records: &[Record]) -> DiffResult<()> {
    for (position, record) in records.iter().enumerate() {
        let unexpected: BTreeSet<&str> = record
            .field_names()
            .filter(|name| !schema.contains(name))
            .collect();
        if !unexpected.is_empty() {
            let fields: Vec<&str> = unexpected.into_iter().collect();
            return Err(DiffError::SchemaMismatch {
                record_type: schema.record_type().to_string(),
                detail: format!(
                    "record {position} on {side} side exposes undeclared fields: {}",
                    fields.join(", ")
                ),
            });
        }
    }
    Ok(())
}
