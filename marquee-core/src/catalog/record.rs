//! Movie records
//!
//! A record mirrors one entry of the data source document. The wire names
//! (`movieName`, `duration`, `imdbRating`) are part of the external contract
//! and are kept on both deserialization and serialization.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Movie identifier
///
/// Signed so that invalid query ids (zero, negative) are representable and
/// can be rejected explicitly rather than failing to parse.
pub type MovieId = i64;

/// Separator used by compound genre values such as `Crime/Drama`
pub const GENRE_SEPARATOR: char = '/';

/// One catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    id: MovieId,

    #[serde(rename = "movieName")]
    title: String,

    director: String,

    year: i32,

    /// May be compound, e.g. `Adventure/Sci-Fi`
    genre: String,

    description: String,

    #[serde(rename = "duration")]
    duration_minutes: i32,

    #[serde(rename = "imdbRating")]
    rating: f64,
}

impl MovieRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: i32,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            director: director.into(),
            year,
            genre: genre.into(),
            description: description.into(),
            duration_minutes,
            rating,
        }
    }

    /// Check the catalog constraints: positive id, non-empty title, director and genre
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id <= 0 {
            return Err(RecordError::NonPositiveId(self.id));
        }

        for (field, value) in [
            ("movieName", &self.title),
            ("director", &self.director),
            ("genre", &self.genre),
        ] {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField { field });
            }
        }

        Ok(())
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Individual genre tokens of a compound genre value
    pub fn genres(&self) -> Vec<&str> {
        self.genre
            .split(GENRE_SEPARATOR)
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// First line of the description
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}
