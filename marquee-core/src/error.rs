//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the catalog data source
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The data source file could not be read
    #[error("Failed to read movie data source: {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data source is not valid JSON
    #[error("Failed to parse movie data source")]
    SourceParse {
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but is not a list of movie entries
    #[error("Movie data source must be a JSON array of movie entries")]
    NotAnArray,

    /// A single entry is missing a field or has a wrongly typed field
    #[error("Malformed movie entry at position {position}")]
    MalformedEntry {
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A single entry failed the record constraints
    #[error("Invalid movie entry at position {position}")]
    InvalidRecord {
        position: usize,
        #[source]
        source: RecordError,
    },
}

/// Constraint violations on a single movie record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("movie id must be positive (got {0})")]
    NonPositiveId(i64),

    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
