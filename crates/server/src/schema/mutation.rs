//! GraphQL mutation resolvers.
//!
//! These resolvers take the write lock and run `MovieCommand` operations.

use async_graphql::{Context, Object, Result};
use movie_store::{MovieId, NewMovie};
use operations::{AddMovie, DeleteMovie, MovieCommand};

use super::types::MovieObject;
use super::SharedStore;

/// Root mutation type for the GraphQL schema.
pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a movie
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        title: String,
        director: String,
        #[graphql(name = "release_date")] release_date: String,
    ) -> Result<Option<MovieObject>> {
        let mut store = ctx.data::<SharedStore>()?.write().await;
        let movie = AddMovie::new(NewMovie::new(title, director, release_date)).execute(&mut store);
        Ok(Some(movie.into()))
    }

    /// Delete a movie
    ///
    /// Returns the deleted movie, or null when no movie had that id.
    async fn delete_movie(&self, ctx: &Context<'_>, id: String) -> Result<Option<MovieObject>> {
        let mut store = ctx.data::<SharedStore>()?.write().await;
        let deleted = DeleteMovie::new(MovieId::from(id)).execute(&mut store);
        Ok(deleted.map(MovieObject::from))
    }
}
