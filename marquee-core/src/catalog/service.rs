//! Catalog capability contract
//!
//! Request handlers depend on this trait rather than on [`CatalogIndex`]
//! directly, so test fixtures can provide their own implementation.
//!
//! [`CatalogIndex`]: super::CatalogIndex

use super::criteria::SearchCriteria;
use super::record::{MovieId, MovieRecord};

pub trait MovieCatalog {
    /// Full catalog in load order
    fn list_all(&self) -> &[MovieRecord];

    /// Keyed lookup; absent or non-positive ids are never found
    fn get_by_id(&self, id: Option<MovieId>) -> Option<&MovieRecord>;

    /// Whether at least one criterion is meaningfully provided
    fn is_valid_search_request(&self, criteria: &SearchCriteria) -> bool {
        criteria.is_meaningful()
    }

    /// Multi-criteria search
    fn search(&self, criteria: &SearchCriteria) -> Vec<&MovieRecord>;
}
