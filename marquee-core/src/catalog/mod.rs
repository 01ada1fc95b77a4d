//! Marquee Catalog - movie records, loading, indexing and search
//!
//! The catalog is loaded once at startup and is read-only afterwards.
//!
//! # Architecture
//!
//! ```text
//! movies.json (embedded or on disk)
//!     │
//!     ▼
//! CatalogLoader      ← parses and validates entries, degrades to empty on failure
//!     │
//!     ▼
//! CatalogIndex       ← ordered listing + id map, immutable
//!     │
//!     ├── list_all / get_by_id
//!     ├── is_valid_search_request  (MovieCatalog default)
//!     └── search     ← id short-circuit, then name and genre filters
//!            │
//!            ▼
//!     SearchResponse ← status, message, criteria echo for front ends
//! ```

mod criteria;
mod index;
mod loader;
mod record;
mod response;
mod service;

pub use criteria::{Criterion, RecognizedCriteria, SearchCriteria};
pub use index::CatalogIndex;
pub use loader::{parse_document, CatalogLoader, DataSource, ParsedDocument, EMBEDDED_MOVIES};
pub use record::{MovieId, MovieRecord, GENRE_SEPARATOR};
pub use response::{
    not_found_message, SearchResponse, SearchStatus, INVALID_REQUEST_MESSAGE, NO_MATCHES_MESSAGE,
};
pub use service::MovieCatalog;

#[cfg(test)]
mod tests;
