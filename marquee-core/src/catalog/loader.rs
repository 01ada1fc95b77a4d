//! Catalog loading
//!
//! Reads the movie data source once at startup. Document-level failures
//! (unreadable file, invalid JSON, wrong shape) are reported and degrade to
//! an empty catalog; entry-level failures drop only the offending entry.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::record::MovieRecord;
use crate::error::{CatalogError, Result};

/// Seed document compiled into the binary
pub const EMBEDDED_MOVIES: &str = include_str!("../../data/movies.json");

/// Where the catalog is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The seed document shipped with the crate
    #[default]
    Embedded,

    /// A JSON document on disk
    File(PathBuf),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::Embedded => "embedded catalog".to_string(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

/// Loads movie records from a [`DataSource`]
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    source: DataSource,
}

impl CatalogLoader {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    /// Loader over a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(DataSource::File(path.as_ref().to_path_buf()))
    }

    /// The source this loader reads from
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Load the catalog, never failing
    ///
    /// Any document-level error is logged and yields an empty catalog so the
    /// application can still start. Not retried.
    pub fn load(&self) -> Vec<MovieRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                error!(
                    source = %self.source.describe(),
                    "Failed to load movies: {:#}",
                    anyhow::Error::new(e)
                );
                Vec::new()
            }
        }
    }

    /// Load the catalog, surfacing document-level errors
    pub fn try_load(&self) -> Result<Vec<MovieRecord>> {
        let parsed = match &self.source {
            DataSource::Embedded => parse_document(EMBEDDED_MOVIES)?,
            DataSource::File(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| CatalogError::SourceRead {
                        path: path.clone(),
                        source,
                    })?;
                parse_document(&content)?
            }
        };

        info!(
            source = %self.source.describe(),
            loaded = parsed.records.len(),
            skipped = parsed.skipped,
            "Loaded movie catalog"
        );
        Ok(parsed.records)
    }
}

/// Outcome of parsing one data source document
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Valid records in document order
    pub records: Vec<MovieRecord>,
    /// Number of entries dropped as malformed or invalid
    pub skipped: usize,
}

/// Parse a data source document into records
///
/// The document must be a JSON array. Entries that are missing a field, carry
/// a wrongly typed field, or violate the record constraints are skipped.
pub fn parse_document(content: &str) -> Result<ParsedDocument> {
    let document: Value =
        serde_json::from_str(content).map_err(|source| CatalogError::SourceParse { source })?;

    let Value::Array(entries) = document else {
        return Err(CatalogError::NotAnArray);
    };

    let total = entries.len();
    let mut records = Vec::with_capacity(total);

    for (position, entry) in entries.into_iter().enumerate() {
        match parse_entry(position, entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping movie entry: {:#}", anyhow::Error::new(e)),
        }
    }

    let skipped = total - records.len();
    if skipped > 0 {
        debug!(skipped, total, "Some movie entries were skipped");
    }

    Ok(ParsedDocument { records, skipped })
}

fn parse_entry(position: usize, entry: Value) -> Result<MovieRecord> {
    // Field presence and types are checked by serde; value constraints by validate()
    let record: MovieRecord = serde_json::from_value(entry)
        .map_err(|source| CatalogError::MalformedEntry { position, source })?;

    record
        .validate()
        .map_err(|source| CatalogError::InvalidRecord { position, source })?;

    Ok(record)
}
