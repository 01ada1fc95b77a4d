//! Search responses
//!
//! Shapes the outcome of a search request for a front end: rejected requests,
//! empty results and matches each get a distinct status and message, with the
//! recognized criteria echoed back on success.

use serde::Serialize;
use tracing::{info, warn};

use super::criteria::{RecognizedCriteria, SearchCriteria};
use super::record::{MovieId, MovieRecord};
use super::service::MovieCatalog;

pub const INVALID_REQUEST_MESSAGE: &str =
    "At least one search parameter is required. Use 'name', 'id', or 'genre'.";

pub const NO_MATCHES_MESSAGE: &str =
    "No movies found matching the search criteria. Try different parameters.";

/// Outcome class of a search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The request carried no meaningful criteria
    Rejected,

    /// The search ran; results may be empty
    Completed,
}

impl SearchStatus {
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchStatus::Rejected)
    }
}

/// Search result payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    #[serde(skip)]
    pub status: SearchStatus,

    pub success: bool,

    pub message: String,

    pub movies: Vec<&'a MovieRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<RecognizedCriteria>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<usize>,
}

impl<'a> SearchResponse<'a> {
    /// Validate `criteria` against `catalog` and run the search if valid
    pub fn evaluate<C>(catalog: &'a C, criteria: &SearchCriteria) -> Self
    where
        C: MovieCatalog + ?Sized,
    {
        if !catalog.is_valid_search_request(criteria) {
            warn!("Invalid search request - no meaningful criteria provided");
            return Self::rejected();
        }

        let movies = catalog.search(criteria);
        let echo = criteria.recognized();

        if movies.is_empty() {
            info!("No movies found matching search criteria");
            return Self {
                status: SearchStatus::Completed,
                success: true,
                message: NO_MATCHES_MESSAGE.to_string(),
                movies,
                search_criteria: Some(echo),
                total_results: None,
            };
        }

        info!("Found {} movies matching search criteria", movies.len());
        let total = movies.len();
        Self {
            status: SearchStatus::Completed,
            success: true,
            message: found_message(total),
            movies,
            search_criteria: Some(echo),
            total_results: Some(total),
        }
    }

    pub fn rejected() -> Self {
        Self {
            status: SearchStatus::Rejected,
            success: false,
            message: INVALID_REQUEST_MESSAGE.to_string(),
            movies: Vec::new(),
            search_criteria: None,
            total_results: None,
        }
    }
}

fn found_message(count: usize) -> String {
    let noun = if count == 1 { "movie" } else { "movies" };
    format!("Found {count} {noun} matching the search.")
}

/// User-facing message for a detail lookup miss
pub fn not_found_message(id: MovieId) -> String {
    format!("Movie with ID {id} was not found.")
}
