//! Project-level aggregation: compare two full snapshots.

use std::collections::HashSet;

use gridiff_model::{project_property_fields, DataSet, ProjectSnapshot, Record};
use tracing::debug;

use crate::dataset::diff_dataset;
use crate::error::Diagnostic;
use crate::fields::diff_named_fields;
use crate::report::{DataSetDiff, ProjectDiff};

/// Compare two project snapshots.
///
/// Diffs the top-level metadata fields, then every record type present in
/// either snapshot: old-snapshot dataset order first, then types that only
/// appear in the new snapshot. A type missing on one side diffs against an
/// empty collection, so its records all report as `Removed` or `Added`.
///
/// A record type whose comparison fails (duplicate key, schema mismatch)
/// becomes a [`Diagnostic::DatasetFailed`] on the result; every other type
/// still reports. Nothing here aborts the whole comparison.
pub fn diff_project(old: &ProjectSnapshot, new: &ProjectSnapshot) -> ProjectDiff {
    let property_changes = diff_named_fields(
        project_property_fields().iter().copied(),
        &old.properties,
        &new.properties,
    );

    let mut data = DataSetDiff::new();
    let mut compared: HashSet<&str> = HashSet::new();

    for dataset in &old.datasets {
        let record_type = dataset.record_type();
        if !compared.insert(record_type) {
            data.diagnostics.push(Diagnostic::DatasetFailed {
                record_type: record_type.to_string(),
                reason: "duplicate dataset in old snapshot".to_string(),
            });
            continue;
        }
        let new_records = new
            .dataset(record_type)
            .map(|d| d.records.as_slice())
            .unwrap_or_default();
        merge(&mut data, dataset, &dataset.records, new_records);
    }

    let mut seen_new: HashSet<&str> = HashSet::new();
    for dataset in &new.datasets {
        let record_type = dataset.record_type();
        if !seen_new.insert(record_type) {
            data.diagnostics.push(Diagnostic::DatasetFailed {
                record_type: record_type.to_string(),
                reason: "duplicate dataset in new snapshot".to_string(),
            });
            continue;
        }
        if compared.contains(record_type) {
            continue;
        }
        merge(&mut data, dataset, &[], &dataset.records);
    }

    debug!(
        property_changes = property_changes.len(),
        entries = data.len(),
        diagnostics = data.diagnostics.len(),
        "project diff complete"
    );

    ProjectDiff {
        property_changes,
        data,
    }
}

/// Run one record type's diff and fold it into the merged result.
fn merge(data: &mut DataSetDiff, dataset: &DataSet, old: &[Record], new: &[Record]) {
    match diff_dataset(&dataset.schema, old, new) {
        Ok(diff) => {
            data.entries.extend(diff.entries);
            data.diagnostics.extend(diff.diagnostics);
        }
        Err(e) => {
            data.diagnostics.push(Diagnostic::DatasetFailed {
                record_type: dataset.record_type().to_string(),
                reason: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ChangeType;
    use gridiff_model::RecordType;

    fn bus_dataset(ids: &[&str]) -> DataSet {
        DataSet::with_records(
            RecordType::Bus.schema().clone(),
            ids.iter()
                .map(|id| Record::from_pairs([("ID", *id)]))
                .collect(),
        )
    }

    fn snapshot(name: &str, datasets: Vec<DataSet>) -> ProjectSnapshot {
        let mut snapshot = ProjectSnapshot::new(Record::from_pairs([("Name", name)]));
        snapshot.datasets = datasets;
        snapshot
    }

    #[test]
    fn metadata_change_is_reported_at_top_level() {
        let old = snapshot("Plant A", vec![]);
        let new = snapshot("Plant A Rev2", vec![]);
        let diff = diff_project(&old, &new);

        assert_eq!(diff.property_changes.len(), 1);
        assert_eq!(diff.property_changes[0].path, "Name");
        assert_eq!(
            diff.property_changes[0].old_value.as_deref(),
            Some("Plant A")
        );
        assert!(diff.data.is_empty());
    }

    #[test]
    fn identical_snapshots_are_clean() {
        let old = snapshot("Plant A", vec![bus_dataset(&["A", "B"])]);
        let diff = diff_project(&old, &old.clone());

        assert!(diff.is_clean());
        assert_eq!(diff.data.unchanged_count(), 2);
    }

    #[test]
    fn datasets_merge_across_record_types() {
        let old = snapshot(
            "P",
            vec![
                bus_dataset(&["A"]),
                DataSet::with_records(
                    RecordType::ArcFlash.schema().clone(),
                    vec![Record::from_pairs([("ID", "AF1"), ("Scenario", "Normal")])],
                ),
            ],
        );
        let new = snapshot("P", vec![bus_dataset(&["A", "B"])]);
        let diff = diff_project(&old, &new);

        let types: Vec<_> = diff
            .data
            .entries
            .iter()
            .map(|e| e.record_type.as_str())
            .collect();
        assert_eq!(types, vec!["Bus", "Bus", "ArcFlash"]);
        assert_eq!(diff.data.added_count(), 1); // Bus B
        assert_eq!(diff.data.removed_count(), 1); // the arc flash result
    }

    #[test]
    fn new_only_record_type_is_all_added() {
        let old = snapshot("P", vec![]);
        let new = snapshot("P", vec![bus_dataset(&["A", "B"])]);
        let diff = diff_project(&old, &new);

        assert_eq!(diff.data.added_count(), 2);
        assert!(diff
            .data
            .entries
            .iter()
            .all(|e| e.change_type == ChangeType::Added));
    }

    #[test]
    fn failed_dataset_does_not_poison_the_rest() {
        let duplicate_keys = bus_dataset(&["A", "A"]);
        let cable = DataSet::with_records(
            RecordType::Cable.schema().clone(),
            vec![Record::from_pairs([("ID", "C1")])],
        );
        let old = snapshot("P", vec![duplicate_keys, cable.clone()]);
        let new = snapshot("P", vec![cable]);
        let diff = diff_project(&old, &new);

        // The cable diff survives; the bus failure is a diagnostic.
        assert_eq!(diff.data.unchanged_count(), 1);
        assert_eq!(diff.data.diagnostics.len(), 1);
        match &diff.data.diagnostics[0] {
            Diagnostic::DatasetFailed { record_type, reason } => {
                assert_eq!(record_type, "Bus");
                assert!(reason.contains("duplicate key"), "reason was: {reason}");
            }
            other => panic!("expected DatasetFailed, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_dataset_in_snapshot_is_diagnosed() {
        let old = snapshot("P", vec![bus_dataset(&["A"]), bus_dataset(&["B"])]);
        let new = snapshot("P", vec![bus_dataset(&["A"])]);
        let diff = diff_project(&old, &new);

        assert_eq!(diff.data.len(), 1);
        assert!(matches!(
            &diff.data.diagnostics[0],
            Diagnostic::DatasetFailed { reason, .. } if reason.contains("duplicate dataset")
        ));
    }

    #[test]
    fn project_diff_is_deterministic() {
        let old = snapshot("P", vec![bus_dataset(&["B", "A"])]);
        let new = snapshot("Q", vec![bus_dataset(&["A", "C"])]);

        let first = diff_project(&old, &new);
        let second = diff_project(&old, &new);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
