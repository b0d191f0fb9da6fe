//! Server crate for the movie GraphQL API.
//!
//! This crate contains the GraphQL schema and the axum application that
//! serves it on `/graphql`.
//!
//! # Modules
//!
//! - [`schema`] - GraphQL schema definition (types, queries, mutations)
//! - [`app`] - HTTP routing and the serve loop
//! - [`config`] - Listen address configuration

pub mod app;
pub mod config;
pub mod schema;

pub use app::{router, serve};
pub use config::ServerConfig;
pub use schema::{build_schema, MovieSchema, SharedStore};
