use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Malformed locus string, expected `chrom:start-stop`: {0:?}")]
    MalformedLocus(String),

    #[error("Invalid integer in {field} column: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Missing column {column} (row has {found} fields)")]
    MissingColumn { column: usize, found: usize },

    #[error("No attribute to take a feature id from: {0:?}")]
    MissingFeatureId(String),
}
