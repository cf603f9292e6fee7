//! Point-in-time snapshots of a project's record collections.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::schema::RecordSchema;

/// One record type's collection at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    /// The schema governing every record in the collection.
    pub schema: RecordSchema,
    /// The records, in source order.
    pub records: Vec<Record>,
}

impl DataSet {
    /// Create an empty dataset for a schema.
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    /// Create a dataset from a schema and records.
    pub fn with_records(schema: RecordSchema, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    /// The record type name this dataset holds.
    pub fn record_type(&self) -> &str {
        self.schema.record_type()
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A full project snapshot: top-level metadata plus per-type datasets.
///
/// Snapshots are plain data. The diff engine compares two of them; nothing
/// here reads or writes files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Project metadata fields (name, revision, settings).
    pub properties: Record,
    /// Per-record-type collections, in source order.
    pub datasets: Vec<DataSet>,
}

impl ProjectSnapshot {
    /// Create a snapshot with metadata and no datasets.
    pub fn new(properties: Record) -> Self {
        Self {
            properties,
            datasets: Vec::new(),
        }
    }

    /// Add a dataset, returning `self` for chaining.
    pub fn with_dataset(mut self, dataset: DataSet) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Look a dataset up by record type name. First match wins.
    pub fn dataset(&self, record_type: &str) -> Option<&DataSet> {
        self.datasets
            .iter()
            .find(|d| d.record_type() == record_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordType;

    #[test]
    fn dataset_lookup_by_type() {
        let snapshot = ProjectSnapshot::new(Record::from_pairs([("Name", "Plant A")]))
            .with_dataset(DataSet::new(RecordType::Bus.schema().clone()))
            .with_dataset(DataSet::new(RecordType::ArcFlash.schema().clone()));

        assert!(snapshot.dataset("Bus").is_some());
        assert!(snapshot.dataset("ArcFlash").is_some());
        assert!(snapshot.dataset("Cable").is_none());
    }

    #[test]
    fn dataset_push_and_len() {
        let mut dataset = DataSet::new(RecordType::Bus.schema().clone());
        assert!(dataset.is_empty());
        dataset.push(Record::from_pairs([("ID", "BUS1")]));
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.record_type(), "Bus");
    }
}
