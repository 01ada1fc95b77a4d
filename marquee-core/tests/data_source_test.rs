//! Integration tests for loading the catalog from files on disk

use marquee_core::catalog::{DataSource, SearchResponse, SearchStatus};
use marquee_core::config::CatalogConfig;
use marquee_core::{CatalogIndex, CatalogLoader, MovieCatalog, SearchCriteria};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = r#"[
  {"id": 1, "movieName": "Night Train", "director": "A. Director", "year": 2001,
   "genre": "Thriller", "description": "", "duration": 101, "imdbRating": 3.9},
  {"id": 2, "movieName": "Morning Train", "director": "B. Director", "year": 2003,
   "genre": "Comedy/Drama", "description": "", "duration": 95, "imdbRating": 3.1},
  {"id": 3, "movieName": "Missing Fields"},
  {"id": 2, "movieName": "Evening Train", "director": "C. Director", "year": 2005,
   "genre": "Drama", "description": "", "duration": 99, "imdbRating": 4.2}
]"#;

fn write_document(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("movies.json");
    fs::write(&path, DOCUMENT).unwrap();
    path
}

#[test]
fn test_partial_catalog_with_duplicate_id() {
    let temp = TempDir::new().unwrap();
    let loader = CatalogLoader::from_path(write_document(&temp));
    let index = CatalogIndex::load(&loader);

    // Malformed entry dropped; duplicate id kept in the listing
    let titles: Vec<_> = index.list_all().iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["Night Train", "Morning Train", "Evening Train"]);
    assert_eq!(index.distinct_ids(), 2);

    // Lookup and id search resolve to the later record
    assert_eq!(index.get_by_id(Some(2)).unwrap().title(), "Evening Train");
    let results = index.search(&SearchCriteria::default().with_id(2));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title(), "Evening Train");

    // Filter search still sees both records
    let criteria = SearchCriteria::default()
        .with_name("train")
        .with_genre("drama");
    let results = index.search(&criteria);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_config_file_points_at_data_source() {
    let temp = TempDir::new().unwrap();
    write_document(&temp);
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "data_source: movies.json\n").unwrap();

    let config = CatalogConfig::load_from_path(&config_path).unwrap();
    let source = match config.data_source.clone() {
        Some(path) => DataSource::File(path),
        None => DataSource::Embedded,
    };
    assert_eq!(source, DataSource::File(temp.path().join("movies.json")));

    let index = CatalogIndex::load(&CatalogLoader::new(source));
    assert_eq!(index.len(), 3);
}

#[test]
fn test_unreadable_source_starts_degraded() {
    let temp = TempDir::new().unwrap();
    let loader = CatalogLoader::from_path(temp.path().join("absent.json"));
    let index = CatalogIndex::load(&loader);
    assert!(index.is_empty());

    // Requests still validate; they just find nothing
    let criteria = SearchCriteria::default().with_name("train");
    let response = SearchResponse::evaluate(&index, &criteria);
    assert_eq!(response.status, SearchStatus::Completed);
    assert!(response.movies.is_empty());
}

#[test]
fn test_catalog_usable_as_trait_object() {
    let temp = TempDir::new().unwrap();
    let loader = CatalogLoader::from_path(write_document(&temp));
    let index = CatalogIndex::load(&loader);
    let catalog: &dyn MovieCatalog = &index;

    assert_eq!(catalog.list_all().len(), 3);
    assert!(catalog.get_by_id(Some(1)).is_some());
    let blank = SearchCriteria::new(Some("  "), Some(0), None);
    assert!(!catalog.is_valid_search_request(&blank));

    let criteria = SearchCriteria::default().with_genre("thriller");
    let response = SearchResponse::evaluate(catalog, &criteria);
    assert_eq!(response.total_results, Some(1));
    assert_eq!(response.movies[0].title(), "Night Train");
}
