//! Mutating operations backing the `Mutation` root type.

use movie_store::{Movie, MovieId, MovieStore, NewMovie};
use tracing::{debug, info};

use crate::traits::MovieCommand;

/// Create a movie with a server-assigned id and append it to the store.
#[derive(Debug, Clone)]
pub struct AddMovie {
    pub movie: NewMovie,
}

impl AddMovie {
    pub fn new(movie: NewMovie) -> Self {
        Self { movie }
    }
}

impl MovieCommand for AddMovie {
    type Output = Movie;

    fn name(&self) -> &str {
        "AddMovie"
    }

    fn execute(self, store: &mut MovieStore) -> Movie {
        debug!(title = %self.movie.title, "{}", self.name());
        let movie = self.movie.into_movie(store.next_id());
        store.append(movie.clone());
        info!(id = %movie.id, title = %movie.title, "added movie");
        movie
    }
}

/// Remove every movie carrying the given id.
///
/// Returns the deleted record, or `None` when nothing matched. If duplicates
/// shared the id, all of them are removed and the first is returned.
#[derive(Debug, Clone)]
pub struct DeleteMovie {
    pub id: MovieId,
}

impl DeleteMovie {
    pub fn new(id: MovieId) -> Self {
        Self { id }
    }
}

impl MovieCommand for DeleteMovie {
    type Output = Option<Movie>;

    fn name(&self) -> &str {
        "DeleteMovie"
    }

    fn execute(self, store: &mut MovieStore) -> Option<Movie> {
        let removed = store.remove_by_id(&self.id);
        debug!(id = %self.id, removed = removed.len(), "{}", self.name());
        if !removed.is_empty() {
            info!(id = %self.id, "deleted movie");
        }
        removed.into_iter().next()
    }
}
