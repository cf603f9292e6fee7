//! Adjustability classification for protective devices.
//!
//! A breaker is "adjustable" when its trip unit can be field-tuned. The
//! source data does not state this directly, so it is derived from the
//! trip-type description and the thirteen trip-unit setting fields.

use crate::catalog::{INDICATOR_FIELDS, INST_AMPS_FIELD, INST_SETTING_FIELD, TRIP_TYPE_FIELD};
use crate::record::Record;

/// Trip-type descriptions that mark a device as adjustable outright.
const TRIP_TYPE_FLAGS: [&str; 3] = ["adj", "adjustable", "electronic"];

/// Indicator values that carry no setting information.
const EMPTY_VALUES: [&str; 4] = ["0", "n/a", "na", "none"];

/// Classify a protective-device record as adjustable or fixed.
///
/// A device is adjustable when its trip type mentions an adjustable or
/// electronic trip unit, or when any trip-unit setting field holds a
/// meaningful value. One exception: a device whose instantaneous setting
/// reads "fixed" and whose only populated setting is the instantaneous
/// amp rating is not adjustable — that amp value describes the fixed
/// element, not a dial.
///
/// Pure function: no side effects, same input always gives the same result.
pub fn is_adjustable(record: &Record) -> bool {
    let flagged = match record.get(TRIP_TYPE_FIELD) {
        Some(trip_type) => {
            let normalized = trip_type.trim().to_ascii_lowercase();
            TRIP_TYPE_FLAGS.iter().any(|flag| normalized.contains(flag))
        }
        None => false,
    };

    let inst_fixed = record
        .get(INST_SETTING_FIELD)
        .map(|v| v.trim().eq_ignore_ascii_case("fixed"))
        .unwrap_or(false);

    let meaningful: Vec<&str> = INDICATOR_FIELDS
        .iter()
        .copied()
        .filter(|field| {
            // A "fixed" instantaneous setting describes the absence of a
            // dial, so it never counts as a setting indicator.
            !(*field == INST_SETTING_FIELD && inst_fixed) && is_meaningful(record.get(field))
        })
        .collect();

    if !flagged && meaningful.is_empty() {
        return false;
    }

    if inst_fixed && meaningful == [INST_AMPS_FIELD] {
        return false;
    }

    true
}

/// Returns `true` if an indicator value actually carries a setting:
/// non-blank and not a placeholder like "0" or "N/A".
fn is_meaningful(value: Option<&str>) -> bool {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            !trimmed.is_empty()
                && !EMPTY_VALUES
                    .iter()
                    .any(|empty| trimmed.eq_ignore_ascii_case(empty))
        }
        None => false,
    }
}
