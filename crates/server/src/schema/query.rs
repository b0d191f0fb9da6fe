//! GraphQL query resolvers.
//!
//! Resolvers only take the read lock and only run `MovieQuery` operations.

use async_graphql::{Context, Object, Result};
use movie_store::MovieId;
use operations::{FindMovie, ListMovies, MovieQuery};

use super::types::MovieObject;
use super::SharedStore;

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single movie
    async fn movie(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<MovieObject>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        let movie = FindMovie::new(id.map(MovieId::from)).run(&store);
        Ok(movie.map(MovieObject::from))
    }

    /// List of all movies
    async fn movies(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<MovieObject>>>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        let movies = ListMovies
            .run(&store)
            .into_iter()
            .map(|movie| Some(MovieObject::from(movie)))
            .collect();
        Ok(Some(movies))
    }
}
