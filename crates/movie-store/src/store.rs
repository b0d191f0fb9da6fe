//! The in-memory movie store.
//!
//! `MovieStore` holds the authoritative sequence of movies for the lifetime
//! of the process. It is a plain owned value: callers decide how to share it
//! (the server wraps it in a lock and hands it to the schema).

use tracing::debug;

use crate::ids::{IdGenerator, UuidGenerator};
use crate::seed;
use crate::types::{Movie, MovieId};

/// Ordered, mutable collection of movies.
///
/// Lookups are linear scans. Insertion order is preserved and is the order
/// `list_all` reports.
#[derive(Debug)]
pub struct MovieStore {
    movies: Vec<Movie>,
    ids: Box<dyn IdGenerator>,
}

impl MovieStore {
    /// Creates an empty store that assigns random UUIDs
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    /// Creates an empty store with a custom id source
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            movies: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Creates a store holding `movies`, in the given order
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self::new().with_movies(movies)
    }

    /// Creates a store holding the built-in seed fixture
    pub fn seeded() -> Self {
        Self::from_movies(seed::seed_movies())
    }

    /// Replaces the contents, keeping the id generator
    pub fn with_movies(mut self, movies: Vec<Movie>) -> Self {
        self.movies = movies;
        self
    }

    /// Draw a fresh id from the store's generator
    pub fn next_id(&self) -> MovieId {
        self.ids.next_id()
    }

    /// First movie whose id equals `id`, if any
    pub fn find_by_id(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| &movie.id == id)
    }

    /// Every movie, in insertion order
    pub fn list_all(&self) -> &[Movie] {
        &self.movies
    }

    /// Insert at the end of the sequence.
    ///
    /// No uniqueness check is made against existing ids.
    pub fn append(&mut self, movie: Movie) {
        debug!(id = %movie.id, "appending movie");
        self.movies.push(movie);
    }

    /// Remove every movie whose id equals `id`.
    ///
    /// Returns the removed records in their original order. When nothing
    /// matches, the store is left untouched and the result is empty.
    pub fn remove_by_id(&mut self, id: &MovieId) -> Vec<Movie> {
        let (removed, kept): (Vec<Movie>, Vec<Movie>) = std::mem::take(&mut self.movies)
            .into_iter()
            .partition(|movie| &movie.id == id);
        self.movies = kept;
        debug!(id = %id, removed = removed.len(), "removed movies");
        removed
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
