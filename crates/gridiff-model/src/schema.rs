//! Static schema descriptors for record types.
//!
//! A schema fixes a record type's declared field set and field order, and
//! designates which field is the identity and (for scenario-keyed types)
//! which is the scenario. Field order here is the order field-level changes
//! appear in diff output, so it is part of the contract, not a detail.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The role a field plays within its record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// The record's identifier. Part of the key, never compared as content.
    Identity,
    /// The analysis scenario. Part of the key for scenario-keyed types.
    Scenario,
    /// Ordinary comparable content.
    Data,
}

/// A single field declaration: name plus role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub role: FieldRole,
}

impl FieldDef {
    /// Declare the identity field.
    pub fn identity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: FieldRole::Identity,
        }
    }

    /// Declare the scenario field.
    pub fn scenario(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: FieldRole::Scenario,
        }
    }

    /// Declare an ordinary data field.
    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: FieldRole::Data,
        }
    }
}

/// The declared shape of one record type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    record_type: String,
    fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Create a schema, validating the field declarations.
    ///
    /// Exactly one identity field and at most one scenario field are
    /// allowed; field names must be unique.
    pub fn new(
        record_type: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Result<Self, ModelError> {
        let record_type = record_type.into();

        let identity_count = fields
            .iter()
            .filter(|f| f.role == FieldRole::Identity)
            .count();
        match identity_count {
            0 => {
                return Err(ModelError::NoIdentityField { record_type });
            }
            1 => {}
            _ => {
                return Err(ModelError::MultipleIdentityFields { record_type });
            }
        }

        let scenario_count = fields
            .iter()
            .filter(|f| f.role == FieldRole::Scenario)
            .count();
        if scenario_count > 1 {
            return Err(ModelError::MultipleScenarioFields { record_type });
        }

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ModelError::DuplicateField {
                    record_type,
                    field: field.name.clone(),
                });
            }
        }

        Ok(Self {
            record_type,
            fields,
        })
    }

    /// The record type name this schema describes.
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// All field declarations, in declared order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// The identity field name. Validation guarantees exactly one exists.
    pub fn identity_field(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.role == FieldRole::Identity)
            .map(|f| f.name.as_str())
            .unwrap_or_default()
    }

    /// The scenario field name, if this type is scenario-keyed.
    pub fn scenario_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.role == FieldRole::Scenario)
            .map(|f| f.name.as_str())
    }

    /// Returns `true` if records of this type are keyed by (id, scenario).
    pub fn keyed_by_scenario(&self) -> bool {
        self.scenario_field().is_some()
    }

    /// Comparable field names in declared order (identity and scenario
    /// excluded — they are the matching key, not content).
    pub fn data_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.role == FieldRole::Data)
            .map(|f| f.name.as_str())
    }

    /// Every declared field name, in declared order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns `true` if the schema declares a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}
