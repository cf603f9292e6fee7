//! Errors and structured diagnostics for the diff engine.
//!
//! Two severities exist. A [`DiffError`] fails the comparison for one
//! record type: guessing which of two same-keyed records wins, or comparing
//! records with divergent field sets, would corrupt an audit. A
//! [`Diagnostic`] rides along with a successful result: a record with a
//! blank identity cannot be matched, but excluding it must be visible to
//! the caller, never silent.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which input collection a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Errors that fail the comparison for one record type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Two records in the same input collection resolved to the same key.
    #[error("duplicate key {key} in {side} {record_type} collection")]
    DuplicateKey {
        record_type: String,
        side: Side,
        key: String,
    },

    /// A record exposes fields its declared schema does not know about.
    #[error("schema mismatch in {record_type}: {detail}")]
    SchemaMismatch { record_type: String, detail: String },
}

/// Convenience alias for engine results.
pub type DiffResult<T> = Result<T, DiffError>;

/// A recoverable problem attached to a diff result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A record's identity field was blank; it was excluded from matching.
    InvalidKey {
        record_type: String,
        side: Side,
        /// Zero-based position of the record in its input collection.
        position: usize,
    },

    /// One record type's comparison failed; other types still report.
    DatasetFailed {
        record_type: String,
        reason: String,
    },
}

impl Diagnostic {
    /// The record type the diagnostic refers to.
    pub fn record_type(&self) -> &str {
        match self {
            Diagnostic::InvalidKey { record_type, .. } => record_type,
            Diagnostic::DatasetFailed { record_type, .. } => record_type,
        }
    }
}
