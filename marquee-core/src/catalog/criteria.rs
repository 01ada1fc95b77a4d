//! Search criteria
//!
//! Every optional input is classified into the same three states before it
//! is used, so request validation and search can never disagree about which
//! criteria are in play.

use serde::{Deserialize, Serialize};

use super::record::MovieId;

/// Classification of one optional search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<T> {
    /// Not supplied at all
    Absent,

    /// Supplied, but blank after trimming (text) or not strictly positive (id)
    Blank,

    /// Supplied and usable
    Meaningful(T),
}

impl<T> Criterion<T> {
    pub fn is_meaningful(&self) -> bool {
        matches!(self, Criterion::Meaningful(_))
    }

    pub fn meaningful(self) -> Option<T> {
        match self {
            Criterion::Meaningful(value) => Some(value),
            Criterion::Absent | Criterion::Blank => None,
        }
    }
}

impl<'a> Criterion<&'a str> {
    fn from_text(value: Option<&'a str>) -> Self {
        match value.map(str::trim) {
            None => Criterion::Absent,
            Some("") => Criterion::Blank,
            Some(trimmed) => Criterion::Meaningful(trimmed),
        }
    }
}

impl Criterion<MovieId> {
    fn from_id(value: Option<MovieId>) -> Self {
        match value {
            None => Criterion::Absent,
            Some(id) if id <= 0 => Criterion::Blank,
            Some(id) => Criterion::Meaningful(id),
        }
    }
}

/// Per-request search input: optional name, id and genre
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub id: Option<MovieId>,

    #[serde(default)]
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn new(name: Option<&str>, id: Option<MovieId>, genre: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            id,
            genre: genre.map(str::to_string),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Title filter, trimmed
    pub fn name(&self) -> Criterion<&str> {
        Criterion::from_text(self.name.as_deref())
    }

    pub fn id(&self) -> Criterion<MovieId> {
        Criterion::from_id(self.id)
    }

    /// Genre filter, trimmed
    pub fn genre(&self) -> Criterion<&str> {
        Criterion::from_text(self.genre.as_deref())
    }

    /// True when at least one criterion is meaningfully provided
    pub fn is_meaningful(&self) -> bool {
        self.name().is_meaningful() || self.id().is_meaningful() || self.genre().is_meaningful()
    }

    /// The criteria that were actually recognized, for echoing back to the caller
    pub fn recognized(&self) -> RecognizedCriteria {
        RecognizedCriteria {
            name: self.name().meaningful().map(str::to_string),
            id: self.id().meaningful(),
            genre: self.genre().meaningful().map(str::to_string),
        }
    }
}

/// Echo of the recognized criteria: trimmed name and genre, positive id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}
