//! Integration tests for the catalog module, run against the embedded seed data

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{CatalogIndex, CatalogLoader, MovieCatalog, MovieRecord, SearchCriteria};
    use std::sync::Arc;

    fn seed_index() -> CatalogIndex {
        CatalogIndex::load(&CatalogLoader::default())
    }

    fn search<'a>(
        index: &'a CatalogIndex,
        name: Option<&str>,
        id: Option<i64>,
        genre: Option<&str>,
    ) -> Vec<&'a MovieRecord> {
        index.search(&SearchCriteria::new(name, id, genre))
    }

    /// Every loaded id resolves to its own record and the listing has no extras
    #[test]
    fn test_uniqueness_and_completeness() {
        let index = seed_index();
        assert!(index.len() >= 12);
        assert_eq!(index.len(), index.distinct_ids());

        for record in index.list_all() {
            let found = index.get_by_id(Some(record.id())).unwrap();
            assert_eq!(found.id(), record.id());
        }
    }

    #[test]
    fn test_get_by_id_valid() {
        let index = seed_index();
        let movie = index.get_by_id(Some(1)).unwrap();
        assert_eq!(movie.title(), "The Prison Escape");
        assert_eq!(movie.director(), "John Director");
        assert!(index.get_by_id(Some(999)).is_none());
    }

    #[test]
    fn test_search_by_name() {
        let index = seed_index();

        let results = search(&index, Some("The Prison Escape"), None, None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "The Prison Escape");

        let results = search(&index, Some("PRISON"), None, None);
        assert_eq!(results.len(), 1);

        let results = search(&index, Some("The"), None, None);
        assert_eq!(results.len(), 8);

        assert!(search(&index, Some("NonExistentMovie"), None, None).is_empty());

        // Punctuation is matched literally and never panics
        assert!(search(&index, Some(":"), None, None).is_empty());
    }

    #[test]
    fn test_search_by_genre() {
        let index = seed_index();

        let drama = search(&index, None, None, Some("Drama"));
        assert_eq!(drama.len(), 7);
        assert!(drama
            .iter()
            .all(|m| m.genre().to_lowercase().contains("drama")));
        assert_eq!(search(&index, None, None, Some("DRAMA")).len(), 7);

        assert_eq!(search(&index, None, None, Some("Action")).len(), 3);
        assert_eq!(search(&index, None, None, Some("Crime")).len(), 4);
        assert_eq!(search(&index, None, None, Some("/")).len(), 10);
        assert!(search(&index, None, None, Some("NonExistentGenre")).is_empty());
    }

    #[test]
    fn test_compound_genre_tokens() {
        let index = seed_index();
        let family_boss = index.get_by_id(Some(2)).unwrap();
        assert_eq!(family_boss.genre(), "Crime/Drama");

        for query in ["Crime", "Drama", "/"] {
            let results = search(&index, None, None, Some(query));
            assert!(results.contains(&family_boss), "genre query {query:?}");
        }
    }

    #[test]
    fn test_multiple_criteria() {
        let index = seed_index();

        let results = search(&index, Some("Family"), None, Some("Crime"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "The Family Boss");

        assert!(search(&index, Some("Prison"), None, Some("Comedy")).is_empty());
    }

    #[test]
    fn test_id_priority() {
        let index = seed_index();
        let results = search(
            &index,
            Some("Different Movie"),
            Some(1),
            Some("Different Genre"),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), 1);
        assert_eq!(results[0].title(), "The Prison Escape");

        assert!(search(&index, None, Some(999), None).is_empty());
    }

    #[test]
    fn test_blank_parameters_return_full_catalog() {
        let index = seed_index();
        let all: Vec<&MovieRecord> = index.list_all().iter().collect();

        for (name, genre) in [
            (Some(""), None),
            (Some("   "), None),
            (None, Some("")),
            (None, Some("   ")),
        ] {
            assert_eq!(search(&index, name, None, genre), all);
        }
    }

    /// Valid request, zero results: not an error
    #[test]
    fn test_valid_request_without_matches() {
        let index = seed_index();
        let criteria = SearchCriteria::default().with_genre("Comedy");
        assert!(index.is_valid_search_request(&criteria));
        assert!(index.search(&criteria).is_empty());
    }

    #[test]
    fn test_concurrent_readers() {
        let index = Arc::new(seed_index());

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let index = Arc::clone(&index);
                scope.spawn(move || {
                    let results = index.search(&SearchCriteria::default().with_name("prison"));
                    assert_eq!(results.len(), 1);
                    assert!(index.get_by_id(Some(1)).is_some());
                });
            }
        });
    }
}
