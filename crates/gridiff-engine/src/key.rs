//! Key resolution: derive a record's comparison key from its schema.

use gridiff_model::{Record, RecordKey, RecordSchema};

/// Resolve the comparison key for a record.
///
/// Simple-keyed types yield [`RecordKey::Simple`]; scenario-keyed types
/// yield [`RecordKey::Composite`]. Returns `None` when the identity field
/// is blank — such a record cannot participate in matching and the caller
/// reports it as an [`InvalidKey`](crate::Diagnostic::InvalidKey)
/// diagnostic rather than dropping it silently.
///
/// A blank scenario value on a scenario-keyed record still resolves (to an
/// empty scenario component): the scenario is identity, never defaulted.
pub fn resolve_key(schema: &RecordSchema, record: &Record) -> Option<RecordKey> {
    if record.is_blank(schema.identity_field()) {
        return None;
    }
    let id = record.get(schema.identity_field())?.to_string();

    Some(match schema.scenario_field() {
        Some(scenario_field) => RecordKey::Composite {
            id,
            scenario: record.get(scenario_field).unwrap_or_default().to_string(),
        },
        None => RecordKey::Simple(id),
    })
}
