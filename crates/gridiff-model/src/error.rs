use thiserror::Error;

/// Errors produced by model construction and schema validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("schema for {record_type} declares no identity field")]
    NoIdentityField { record_type: String },

    #[error("schema for {record_type} declares more than one identity field")]
    MultipleIdentityFields { record_type: String },

    #[error("schema for {record_type} declares more than one scenario field")]
    MultipleScenarioFields { record_type: String },

    #[error("schema for {record_type} declares duplicate field {field}")]
    DuplicateField { record_type: String, field: String },

    #[error("unknown record type: {0}")]
    UnknownRecordType(String),
}
