//! Catalog index and search
//!
//! The index keeps records in load order for listing and a position map keyed
//! by id for lookups. It is built once and never mutated afterwards, so it can
//! be shared freely (e.g. behind an `Arc`) across threads.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::criteria::{Criterion, SearchCriteria};
use super::loader::CatalogLoader;
use super::record::{MovieId, MovieRecord};
use super::service::MovieCatalog;

/// Immutable in-memory movie catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// All records, in load order
    records: Vec<MovieRecord>,

    /// Id -> position in `records`
    by_id: HashMap<MovieId, usize>,
}

impl CatalogIndex {
    /// Build the index from loaded records
    ///
    /// A repeated id replaces the earlier entry in the id map (last write
    /// wins) while both records stay in the listing. The collision is logged,
    /// not corrected.
    pub fn build(records: Vec<MovieRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if let Some(previous) = by_id.insert(record.id(), position) {
                warn!(
                    id = record.id(),
                    previous_position = previous,
                    position,
                    "Duplicate movie id in catalog; lookups resolve to the later entry"
                );
            }
        }

        debug!(
            records = records.len(),
            distinct_ids = by_id.len(),
            "Built catalog index"
        );

        Self { records, by_id }
    }

    /// Load through `loader` and build. Load failures yield an empty index.
    pub fn load(loader: &CatalogLoader) -> Self {
        Self::build(loader.load())
    }

    /// Full catalog in load order
    pub fn list_all(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Look up a record by id
    ///
    /// `None`, zero and negative ids are "not found" without touching the map.
    pub fn get_by_id(&self, id: Option<MovieId>) -> Option<&MovieRecord> {
        let id = id.filter(|id| *id > 0)?;
        self.by_id.get(&id).map(|&position| &self.records[position])
    }

    /// Multi-criteria search
    ///
    /// A positive id wins outright: the result is that record or nothing, and
    /// name and genre are ignored. Otherwise the catalog is narrowed by a
    /// case-insensitive substring match on the title and then on the genre;
    /// blank or absent filters are skipped.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&MovieRecord> {
        debug!(
            name = ?criteria.name,
            id = ?criteria.id,
            genre = ?criteria.genre,
            "Searching movies"
        );

        if let Criterion::Meaningful(id) = criteria.id() {
            let results: Vec<&MovieRecord> = self.get_by_id(Some(id)).into_iter().collect();
            debug!(count = results.len(), "Search resolved by id");
            return results;
        }

        let name = criteria.name().meaningful().map(str::to_lowercase);
        let genre = criteria.genre().meaningful().map(str::to_lowercase);

        let results: Vec<&MovieRecord> = self
            .records
            .iter()
            .filter(|record| contains_ignore_case(record.title(), name.as_deref()))
            .filter(|record| contains_ignore_case(record.genre(), genre.as_deref()))
            .collect();

        debug!(count = results.len(), "Search completed");
        results
    }

    /// Number of records in the listing (duplicates included)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct ids reachable through lookup
    pub fn distinct_ids(&self) -> usize {
        self.by_id.len()
    }
}

/// `needle` must already be lowercased; `None` matches everything
fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}

impl MovieCatalog for CatalogIndex {
    fn list_all(&self) -> &[MovieRecord] {
        CatalogIndex::list_all(self)
    }

    fn get_by_id(&self, id: Option<MovieId>) -> Option<&MovieRecord> {
        CatalogIndex::get_by_id(self, id)
    }

    fn search(&self, criteria: &SearchCriteria) -> Vec<&MovieRecord> {
        CatalogIndex::search(self, criteria)
    }
}
