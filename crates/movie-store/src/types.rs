//! Core domain types for the movie store.
//!
//! A `Movie` is the only entity. Its id is opaque and assigned by the store;
//! callers only ever supply a `NewMovie`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque unique identifier for a movie.
///
/// Seed records use short ids such as `"1"`, movies created at runtime get a
/// random UUID. Nothing inspects the contents beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned on creation, never changed afterwards
    pub id: MovieId,
    pub title: String,
    pub director: String,
    /// Free-form date string; the format is not validated
    pub release_date: String,
}

/// The caller-supplied fields of a movie, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub release_date: String,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            release_date: release_date.into(),
        }
    }

    /// Attach an id and produce the stored record
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            release_date: self.release_date,
        }
    }
}
