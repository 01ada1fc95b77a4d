//! Marquee core library exports

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{CatalogIndex, CatalogLoader, MovieCatalog, MovieRecord, SearchCriteria};
pub use error::{CatalogError, RecordError, Result};
