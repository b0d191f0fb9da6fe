//! Read-only operations backing the `Query` root type.

use movie_store::{Movie, MovieId, MovieStore};
use tracing::debug;

use crate::traits::MovieQuery;

/// Look up a single movie.
///
/// The id is optional because the GraphQL argument is nullable. A missing id
/// matches nothing, as does an unknown one; neither is an error.
#[derive(Debug, Clone)]
pub struct FindMovie {
    pub id: Option<MovieId>,
}

impl FindMovie {
    pub fn new(id: Option<MovieId>) -> Self {
        Self { id }
    }
}

impl MovieQuery for FindMovie {
    type Output = Option<Movie>;

    fn name(&self) -> &str {
        "FindMovie"
    }

    fn run(&self, store: &MovieStore) -> Option<Movie> {
        let found = self
            .id
            .as_ref()
            .and_then(|id| store.find_by_id(id))
            .cloned();
        debug!(id = ?self.id, found = found.is_some(), "{}", self.name());
        found
    }
}

/// Every movie in insertion order, unfiltered.
#[derive(Debug, Clone, Copy)]
pub struct ListMovies;

impl MovieQuery for ListMovies {
    type Output = Vec<Movie>;

    fn name(&self) -> &str {
        "ListMovies"
    }

    fn run(&self, store: &MovieStore) -> Vec<Movie> {
        debug!(count = store.len(), "{}", self.name());
        store.list_all().to_vec()
    }
}
