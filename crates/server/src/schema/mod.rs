//! GraphQL schema definition.
//!
//! This module contains the GraphQL schema, including:
//! - [`types`] - the `Movie` object type
//! - [`query`] - `movie` and `movies` resolvers
//! - [`mutation`] - `addMovie` and `deleteMovie` resolvers

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{extensions::Tracing, EmptySubscription, Schema};
use movie_store::MovieStore;
use tokio::sync::RwLock;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::MovieObject;

/// The GraphQL schema type for the movie API.
pub type MovieSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The store as seen by resolvers.
///
/// Queries take the read lock and mutations the write lock. Every resolver
/// does its work under one acquisition, so each call is atomic with respect
/// to concurrent requests.
pub type SharedStore = Arc<RwLock<MovieStore>>;

/// Create the schema, taking ownership of `store` for the life of the schema.
pub fn build_schema(store: MovieStore) -> MovieSchema {
    build_schema_with_shared(Arc::new(RwLock::new(store)))
}

/// Create the schema over a store handle the caller keeps a clone of.
pub fn build_schema_with_shared(store: SharedStore) -> MovieSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

/// The schema in GraphQL SDL form
pub fn sdl() -> String {
    build_schema(MovieStore::new()).sdl()
}
