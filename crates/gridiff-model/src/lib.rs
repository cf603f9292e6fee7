//! Foundation types for gridiff.
//!
//! This crate provides the record model shared by the diff engine: typed
//! equipment and calculation-result records, their static schema
//! descriptors, comparison keys, and point-in-time snapshots of a
//! power-system project. It also hosts the adjustability classifier, the
//! one piece of derived decision logic in the data layer.
//!
//! # Key Types
//!
//! - [`Record`] — A single equipment or calculation-result record (field name → nullable string)
//! - [`RecordSchema`] / [`FieldDef`] / [`FieldRole`] — Static schema descriptors
//! - [`RecordType`] — The closed set of diffable record kinds with catalog schemas
//! - [`RecordKey`] — Simple or composite (id + scenario) comparison key
//! - [`DataSet`] / [`ProjectSnapshot`] — One record type's collection / a full project snapshot

pub mod adjustable;
pub mod catalog;
pub mod error;
pub mod key;
pub mod record;
pub mod schema;
pub mod snapshot;

pub use adjustable::is_adjustable;
pub use catalog::{project_property_fields, RecordType};
pub use error::ModelError;
pub use key::RecordKey;
pub use record::Record;
pub use schema::{FieldDef, FieldRole, RecordSchema};
pub use snapshot::{DataSet, ProjectSnapshot};
