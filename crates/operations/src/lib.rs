//! Read and write operations over the movie store.
//!
//! This crate provides:
//! - `MovieQuery` and `MovieCommand` traits separating reads from writes
//! - Queries: `FindMovie`, `ListMovies`
//! - Commands: `AddMovie`, `DeleteMovie`
//!
//! ## Architecture
//! A query borrows the store immutably and a command borrows it mutably, so
//! whether an operation may touch shared state is visible in its signature.
//! The GraphQL resolvers are thin wrappers that pick the right lock and run
//! one of these operations.
//!
//! ## Example Usage
//! ```
//! use movie_store::{MovieStore, NewMovie};
//! use operations::{AddMovie, ListMovies, MovieCommand, MovieQuery};
//!
//! let mut store = MovieStore::seeded();
//! let added = AddMovie::new(NewMovie::new("Inception", "Christopher Nolan", "2010-07-16"))
//!     .execute(&mut store);
//!
//! let all = ListMovies.run(&store);
//! assert_eq!(all.len(), 2);
//! assert_eq!(all[1], added);
//! ```

pub mod commands;
pub mod queries;
pub mod traits;

// Re-export main types
pub use commands::{AddMovie, DeleteMovie};
pub use queries::{FindMovie, ListMovies};
pub use traits::{MovieCommand, MovieQuery};
