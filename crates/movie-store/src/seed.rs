//! Seed data for the store.
//!
//! The server starts from a static fixture unless a JSON fixture file is
//! supplied. A fixture file is either a bare array of movies or an object with
//! a `movies` array:
//!
//! ```json
//! { "movies": [ { "id": "1", "title": "...", "director": "...", "release_date": "..." } ] }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{Result, StoreError};
use crate::store::MovieStore;
use crate::types::{Movie, MovieId};

/// The built-in fixture loaded at process start
pub fn seed_movies() -> Vec<Movie> {
    vec![Movie {
        id: MovieId::from("1"),
        title: "The Shawshank Redemption".to_string(),
        director: "Frank Darabont".to_string(),
        release_date: "1994-09-10".to_string(),
    }]
}

/// Parse fixture contents. `origin` is only used in error messages.
///
/// An object is read through its `movies` field, anything else as a bare
/// array, so serde's error names the offending field.
pub fn parse_seed(contents: &str, origin: &str) -> Result<Vec<Movie>> {
    let parse_error = |err: serde_json::Error| StoreError::Parse {
        path: origin.to_string(),
        reason: err.to_string(),
    };

    let value: Value = serde_json::from_str(contents).map_err(parse_error)?;
    let movies: Vec<Movie> = match value {
        Value::Object(mut fields) => {
            let movies = fields.remove("movies").ok_or_else(|| StoreError::Parse {
                path: origin.to_string(),
                reason: "missing field `movies`".to_string(),
            })?;
            serde_json::from_value(movies)
        }
        other => serde_json::from_value(other),
    }
    .map_err(parse_error)?;

    Ok(movies)
}

/// Read a JSON fixture file
pub fn load_seed_file(path: &Path) -> Result<Vec<Movie>> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => StoreError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => StoreError::Io(err),
    })?;
    let movies = parse_seed(&contents, &path.display().to_string())?;

    info!("Loaded {} seed movies from {}", movies.len(), path.display());
    Ok(movies)
}

impl MovieStore {
    /// Creates a store seeded from a JSON fixture file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Ok(Self::from_movies(load_seed_file(path)?))
    }
}
