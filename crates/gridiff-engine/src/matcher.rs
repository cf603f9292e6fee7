//! Entry matching: align two record collections by comparison key.

use std::collections::{HashMap, HashSet};

use gridiff_model::{Record, RecordKey, RecordSchema};
use tracing::debug;

use crate::error::{Diagnostic, DiffError, DiffResult, Side};
use crate::key::resolve_key;

/// A key that matched on both sides, with the positions of the two records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedPair {
    pub key: RecordKey,
    pub old_index: usize,
    pub new_index: usize,
}

/// A key present on only one side, with the record's position there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedRecord {
    pub key: RecordKey,
    pub index: usize,
}

/// The three-way partition of two record collections.
///
/// Every resolvable key across both inputs lands in exactly one of
/// `matched`, `old_only`, or `new_only`. Records whose identity field is
/// blank land in `diagnostics` instead. Each partition preserves its
/// input-side order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    pub matched: Vec<MatchedPair>,
    pub old_only: Vec<KeyedRecord>,
    pub new_only: Vec<KeyedRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Partition `old` and `new` into matched pairs, old-only, and new-only.
///
/// A duplicate key within one side fails the whole comparison with
/// [`DiffError::DuplicateKey`] — silently letting one record win would
/// corrupt the audit trail the diff exists to support.
pub fn match_records(
    schema: &RecordSchema,
    old: &[Record],
    new: &[Record],
) -> DiffResult<MatchSet> {
    let mut diagnostics = Vec::new();

    let old_keys = resolve_side(schema, Side::Old, old, &mut diagnostics)?;
    let new_keys = resolve_side(schema, Side::New, new, &mut diagnostics)?;

    let new_by_key: HashMap<&RecordKey, usize> = new_keys
        .iter()
        .enumerate()
        .filter_map(|(i, k)| k.as_ref().map(|k| (k, i)))
        .collect();
    let old_key_set: HashSet<&RecordKey> = old_keys.iter().flatten().collect();

    let mut set = MatchSet {
        diagnostics,
        ..MatchSet::default()
    };

    for (old_index, key) in old_keys.iter().enumerate() {
        let Some(key) = key else { continue };
        match new_by_key.get(key) {
            Some(&new_index) => set.matched.push(MatchedPair {
                key: key.clone(),
                old_index,
                new_index,
            }),
            None => set.old_only.push(KeyedRecord {
                key: key.clone(),
                index: old_index,
            }),
        }
    }

    for (new_index, key) in new_keys.iter().enumerate() {
        let Some(key) = key else { continue };
        if !old_key_set.contains(key) {
            set.new_only.push(KeyedRecord {
                key: key.clone(),
                index: new_index,
            });
        }
    }

    debug!(
        record_type = schema.record_type(),
        matched = set.matched.len(),
        old_only = set.old_only.len(),
        new_only = set.new_only.len(),
        invalid = set.diagnostics.len(),
        "matched record collections"
    );

    Ok(set)
}

/// Resolve every key on one side, collecting `InvalidKey` diagnostics for
/// blank identities and rejecting duplicates within the side.
fn resolve_side(
    schema: &RecordSchema,
    side: Side,
    records: &[Record],
    diagnostics: &mut Vec<Diagnostic>,
) -> DiffResult<Vec<Option<RecordKey>>> {
    let mut seen: HashSet<RecordKey> = HashSet::with_capacity(records.len());
    let mut keys = Vec::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        match resolve_key(schema, record) {
            Some(key) => {
                if !seen.insert(key.clone()) {
                    return Err(DiffError::DuplicateKey {
                        record_type: schema.record_type().to_string(),
                        side,
                        key: key.to_string(),
                    });
                }
                keys.push(Some(key));
            }
            None => {
                diagnostics.push(Diagnostic::InvalidKey {
                    record_type: schema.record_type().to_string(),
                    side,
                    position,
                });
                keys.push(None);
            }
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiff_model::RecordType;

    fn bus(id: &str) -> Record {
        Record::from_pairs([("ID", id)])
    }

    #[test]
    fn disjoint_collections_partition_cleanly() {
        let old = vec![bus("A"), bus("B")];
        let new = vec![bus("C")];
        let set = match_records(RecordType::Bus.schema(), &old, &new).unwrap();

        assert!(set.matched.is_empty());
        assert_eq!(set.old_only.len(), 2);
        assert_eq!(set.new_only.len(), 1);
        assert!(set.diagnostics.is_empty());
    }

    #[test]
    fn shared_keys_match() {
        let old = vec![bus("A"), bus("B")];
        let new = vec![bus("B"), bus("C")];
        let set = match_records(RecordType::Bus.schema(), &old, &new).unwrap();

        assert_eq!(set.matched.len(), 1);
        assert_eq!(set.matched[0].key, RecordKey::Simple("B".to_string()));
        assert_eq!(set.matched[0].old_index, 1);
        assert_eq!(set.matched[0].new_index, 0);
        assert_eq!(set.old_only.len(), 1);
        assert_eq!(set.new_only.len(), 1);
    }

    #[test]
    fn partitions_preserve_input_order() {
        let old = vec![bus("Z"), bus("A"), bus("M")];
        let new = vec![bus("Q"), bus("B")];
        let set = match_records(RecordType::Bus.schema(), &old, &new).unwrap();

        let old_ids: Vec<_> = set.old_only.iter().map(|k| k.key.id().to_string()).collect();
        let new_ids: Vec<_> = set.new_only.iter().map(|k| k.key.id().to_string()).collect();
        assert_eq!(old_ids, vec!["Z", "A", "M"]);
        assert_eq!(new_ids, vec!["Q", "B"]);
    }

    #[test]
    fn duplicate_key_fails_the_comparison() {
        let old = vec![bus("A"), bus("A")];
        let err = match_records(RecordType::Bus.schema(), &old, &[]).unwrap_err();
        assert_eq!(
            err,
            DiffError::DuplicateKey {
                record_type: "Bus".to_string(),
                side: Side::Old,
                key: "A".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_on_new_side_reports_new() {
        let new = vec![bus("A"), bus("A")];
        let err = match_records(RecordType::Bus.schema(), &[], &new).unwrap_err();
        assert!(matches!(err, DiffError::DuplicateKey { side: Side::New, .. }));
    }

    #[test]
    fn blank_identity_becomes_diagnostic_not_entry() {
        let old = vec![bus("A"), bus("")];
        let set = match_records(RecordType::Bus.schema(), &old, &[]).unwrap();

        assert_eq!(set.old_only.len(), 1);
        assert_eq!(
            set.diagnostics,
            vec![Diagnostic::InvalidKey {
                record_type: "Bus".to_string(),
                side: Side::Old,
                position: 1,
            }]
        );
    }

    #[test]
    fn scenario_distinguishes_composite_keys() {
        let schema = RecordType::ArcFlash.schema();
        let old = vec![Record::from_pairs([("ID", "AF1"), ("Scenario", "Normal")])];
        let new = vec![Record::from_pairs([("ID", "AF1"), ("Scenario", "Alt")])];
        let set = match_records(schema, &old, &new).unwrap();

        assert!(set.matched.is_empty());
        assert_eq!(set.old_only.len(), 1);
        assert_eq!(set.new_only.len(), 1);
    }

    #[test]
    fn same_id_same_scenario_matches() {
        let schema = RecordType::ArcFlash.schema();
        let old = vec![Record::from_pairs([("ID", "AF1"), ("Scenario", "Normal")])];
        let new = vec![Record::from_pairs([("ID", "AF1"), ("Scenario", "Normal")])];
        let set = match_records(schema, &old, &new).unwrap();

        assert_eq!(set.matched.len(), 1);
        assert!(set.old_only.is_empty());
        assert!(set.new_only.is_empty());
    }

    #[test]
    fn every_record_lands_in_exactly_one_partition() {
        let old = vec![bus("A"), bus("B"), bus("C")];
        let new = vec![bus("B"), bus("D")];
        let set = match_records(RecordType::Bus.schema(), &old, &new).unwrap();

        let total = set.matched.len() * 2 + set.old_only.len() + set.new_only.len();
        assert_eq!(total, old.len() + new.len());
    }
}
