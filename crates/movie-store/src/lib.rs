//! # Movie Store Crate
//!
//! In-memory storage for the movie GraphQL API.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, NewMovie, MovieId)
//! - **store**: The ordered, mutable `MovieStore`
//! - **ids**: Id generators (random UUIDs, deterministic counters)
//! - **seed**: Built-in fixture and JSON fixture loading
//! - **error**: Error types for seed loading
//!
//! ## Example Usage
//!
//! ```
//! use movie_store::{MovieId, MovieStore, NewMovie};
//!
//! let mut store = MovieStore::seeded();
//! let movie = NewMovie::new("Inception", "Christopher Nolan", "2010-07-16")
//!     .into_movie(store.next_id());
//! store.append(movie);
//!
//! assert_eq!(store.list_all().len(), 2);
//! assert!(store.find_by_id(&MovieId::from("1")).is_some());
//! ```

pub mod error;
pub mod ids;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use seed::{load_seed_file, seed_movies};
pub use store::MovieStore;
pub use types::{Movie, MovieId, NewMovie};
