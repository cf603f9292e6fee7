//! Comparison keys for record matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The key a record is matched under when two snapshots are compared.
///
/// Equipment types use a simple identifier; calculation-result types
/// (arc flash, short circuit) are identified by identifier *and* scenario,
/// so the same device studied under two scenarios yields two independent
/// entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKey {
    /// Identifier alone.
    Simple(String),
    /// Identifier plus scenario.
    Composite { id: String, scenario: String },
}

impl RecordKey {
    /// The identifier part of the key.
    pub fn id(&self) -> &str {
        match self {
            RecordKey::Simple(id) => id,
            RecordKey::Composite { id, .. } => id,
        }
    }

    /// The scenario part, if this is a composite key.
    pub fn scenario(&self) -> Option<&str> {
        match self {
            RecordKey::Simple(_) => None,
            RecordKey::Composite { scenario, .. } => Some(scenario),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Simple(id) => write!(f, "{id}"),
            RecordKey::Composite { id, scenario } => write!(f, "{id} @ {scenario}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_key_renders_as_id() {
        let key = RecordKey::Simple("BUS1".to_string());
        assert_eq!(key.to_string(), "BUS1");
        assert_eq!(key.id(), "BUS1");
        assert_eq!(key.scenario(), None);
    }

    #[test]
    fn composite_key_renders_id_and_scenario() {
        let key = RecordKey::Composite {
            id: "AF1".to_string(),
            scenario: "Normal".to_string(),
        };
        assert_eq!(key.to_string(), "AF1 @ Normal");
        assert_eq!(key.scenario(), Some("Normal"));
    }

    #[test]
    fn same_id_different_scenario_are_distinct() {
        let a = RecordKey::Composite {
            id: "AF1".to_string(),
            scenario: "Normal".to_string(),
        };
        let b = RecordKey::Composite {
            id: "AF1".to_string(),
            scenario: "Alt".to_string(),
        };
        assert_ne!(a, b);
    }

    #[test]
    fn simple_and_composite_never_collide() {
        let simple = RecordKey::Simple("AF1".to_string());
        let composite = RecordKey::Composite {
            id: "AF1".to_string(),
            scenario: String::new(),
        };
        assert_ne!(simple, composite);
    }
}
