//! GraphQL type definitions.

use async_graphql::SimpleObject;
use movie_store::Movie;

/// This represents a movie
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Movie")]
pub struct MovieObject {
    pub id: String,
    pub title: String,
    pub director: String,
    #[graphql(name = "release_date")]
    pub release_date: String,
}

impl From<Movie> for MovieObject {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.into_inner(),
            title: movie.title,
            director: movie.director,
            release_date: movie.release_date,
        }
    }
}
