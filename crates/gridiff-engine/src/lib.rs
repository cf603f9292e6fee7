//! Diff engine for power-system project snapshots.
//!
//! Computes a precise structural difference between an "old" and a "new"
//! snapshot of typed equipment and calculation-result records, classifying
//! every record as unchanged, added, removed, or modified and enumerating
//! the exact changed fields on modified records. The pipeline is pure and
//! synchronous: key resolution, entry matching, field comparison, then
//! aggregation, with deterministic output order so identical inputs always
//! produce byte-identical reports.
//!
//! # Key Types
//!
//! - [`ChangeType`] / [`PropertyChange`] / [`EntryDiff`] — Per-record classification and field changes
//! - [`DataSetDiff`] — One record type's (or a merged) diff with derived counts
//! - [`ProjectDiff`] — Metadata changes plus the merged dataset diff
//! - [`DiffError`] / [`Diagnostic`] — Hard failures and recoverable reports

pub mod dataset;
pub mod error;
pub mod fields;
pub mod key;
pub mod matcher;
pub mod project;
pub mod report;

pub use dataset::diff_dataset;
pub use error::{Diagnostic, DiffError, DiffResult, Side};
pub use fields::{diff_fields, diff_named_fields};
pub use key::resolve_key;
pub use matcher::{match_records, KeyedRecord, MatchSet, MatchedPair};
pub use project::diff_project;
pub use report::{ChangeType, DataSetDiff, EntryDiff, ProjectDiff, PropertyChange};
