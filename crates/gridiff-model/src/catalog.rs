//! The closed catalog of diffable record types and their static schemas.
//!
//! Equipment types are keyed by identifier alone; calculation-result types
//! (arc flash and short circuit results) are keyed by identifier plus
//! scenario. The catalog is the single source of truth for declared field
//! sets and field order.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::{FieldDef, RecordSchema};

/// Trip-unit setting fields on a protective device that indicate an
/// adjustable trip unit when populated. Order follows the schema.
pub const INDICATOR_FIELDS: [&str; 13] = [
    "LTPickup",
    "LTBand",
    "LTCurve",
    "STPickup",
    "STBand",
    "STI2T",
    "InstSetting",
    "TripAdjust",
    "InstA",
    "MaintSetting",
    "GroundA",
    "GroundDelay",
    "GroundI2T",
];

/// The trip-type field on a protective device.
pub const TRIP_TYPE_FIELD: &str = "TripType";

/// The instantaneous-setting indicator field.
pub const INST_SETTING_FIELD: &str = "InstSetting";

/// The instantaneous-amps indicator field.
pub const INST_AMPS_FIELD: &str = "InstA";

/// Project-level metadata fields compared for the top-level property diff.
pub fn project_property_fields() -> &'static [&'static str] {
    &[
        "Name",
        "Description",
        "Location",
        "Engineer",
        "Revision",
        "BaseMVA",
        "Frequency",
    ]
}

/// The closed set of record kinds the engine knows how to diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Bus,
    Cable,
    Transformer2W,
    ProtectiveDevice,
    ArcFlash,
    ShortCircuit,
}

impl RecordType {
    /// Every catalog record type, equipment first, then calculation results.
    pub const ALL: [RecordType; 6] = [
        RecordType::Bus,
        RecordType::Cable,
        RecordType::Transformer2W,
        RecordType::ProtectiveDevice,
        RecordType::ArcFlash,
        RecordType::ShortCircuit,
    ];

    /// The catalog name of this record type.
    pub fn name(&self) -> &'static str {
        match self {
            RecordType::Bus => "Bus",
            RecordType::Cable => "Cable",
            RecordType::Transformer2W => "Transformer2W",
            RecordType::ProtectiveDevice => "ProtectiveDevice",
            RecordType::ArcFlash => "ArcFlash",
            RecordType::ShortCircuit => "ShortCircuit",
        }
    }

    /// Look a record type up by its catalog name.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        RecordType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| ModelError::UnknownRecordType(name.to_string()))
    }

    /// Returns `true` for calculation-result types keyed by (id, scenario).
    pub fn keyed_by_scenario(&self) -> bool {
        matches!(self, RecordType::ArcFlash | RecordType::ShortCircuit)
    }

    /// The static schema for this record type.
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            RecordType::Bus => &BUS,
            RecordType::Cable => &CABLE,
            RecordType::Transformer2W => &TRANSFORMER_2W,
            RecordType::ProtectiveDevice => &PROTECTIVE_DEVICE,
            RecordType::ArcFlash => &ARC_FLASH,
            RecordType::ShortCircuit => &SHORT_CIRCUIT,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Catalog schemas are built once. `RecordSchema::new` only fails on
// malformed declarations, which a broken catalog test would catch.
fn build(record_type: &str, fields: Vec<FieldDef>) -> RecordSchema {
    match RecordSchema::new(record_type, fields) {
        Ok(schema) => schema,
        Err(e) => unreachable!("invalid catalog schema: {e}"),
    }
}

static BUS: Lazy<RecordSchema> = Lazy::new(|| {
    build(
        "Bus",
        vec![
            FieldDef::identity("ID"),
            FieldDef::data("kV"),
            FieldDef::data("Type"),
            FieldDef::data("Substation"),
            FieldDef::data("Area"),
            FieldDef::data("InService"),
        ],
    )
});

static CABLE: Lazy<RecordSchema> = Lazy::new(|| {
    build(
        "Cable",
        vec![
            FieldDef::identity("ID"),
            FieldDef::data("FromBus"),
            FieldDef::data("ToBus"),
            FieldDef::data("Size"),
            FieldDef::data("Length"),
            FieldDef::data("Insulation"),
            FieldDef::data("ConductorsPerPhase"),
        ],
    )
});

static TRANSFORMER_2W: Lazy<RecordSchema> = Lazy::new(|| {
    build(
        "Transformer2W",
        vec![
            FieldDef::identity("ID"),
            FieldDef::data("PrimBus"),
            FieldDef::data("SecBus"),
            FieldDef::data("PrimKV"),
            FieldDef::data("SecKV"),
            FieldDef::data("MVA"),
            FieldDef::data("ImpedancePct"),
            FieldDef::data("XR"),
        ],
    )
});

static PROTECTIVE_DEVICE: Lazy<RecordSchema> = Lazy::new(|| {
    let mut fields = vec![
        FieldDef::identity("ID"),
        FieldDef::data("Bus"),
        FieldDef::data("Manufacturer"),
        FieldDef::data("Model"),
        FieldDef::data(TRIP_TYPE_FIELD),
        FieldDef::data("FrameA"),
        FieldDef::data("SensorA"),
    ];
    fields.extend(INDICATOR_FIELDS.iter().map(|f| FieldDef::data(*f)));
    build("ProtectiveDevice", fields)
});

static ARC_FLASH: Lazy<RecordSchema> = Lazy::new(|| {
    build(
        "ArcFlash",
        vec![
            FieldDef::identity("ID"),
            FieldDef::scenario("Scenario"),
            FieldDef::data("Bus"),
            FieldDef::data("kV"),
            FieldDef::data("BoltedFaultKA"),
            FieldDef::data("ArcingFaultKA"),
            FieldDef::data("IncidentEnergy"),
            FieldDef::data("Boundary"),
            FieldDef::data("WorkingDistance"),
            FieldDef::data("ClearingTime"),
        ],
    )
});

static SHORT_CIRCUIT: Lazy<RecordSchema> = Lazy::new(|| {
    build(
        "ShortCircuit",
        vec![
            FieldDef::identity("ID"),
            FieldDef::scenario("Scenario"),
            FieldDef::data("Bus"),
            FieldDef::data("kV"),
            FieldDef::data("ThreePhaseKA"),
            FieldDef::data("LGKA"),
            FieldDef::data("LLKA"),
            FieldDef::data("XRRatio"),
            FieldDef::data("AsymKA"),
        ],
    )
});
