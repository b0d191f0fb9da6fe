//! HTTP server setup and routing.

use anyhow::{Context, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use movie_store::MovieStore;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::schema::{build_schema, MovieSchema};

/// Path serving both the GraphQL endpoint and the GraphiQL explorer
pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(State(schema): State<MovieSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health_check_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Build the application router.
///
/// `GET /graphql` serves the GraphiQL explorer, `POST /graphql` executes
/// GraphQL requests, `GET /health` answers 200.
pub fn router(schema: MovieSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health_check_handler))
        .with_state(schema)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            warn!("Failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await
        }
    }
}

/// Serve the API until Ctrl-C.
pub async fn serve(config: ServerConfig, store: MovieStore) -> Result<()> {
    info!("Serving {} seed movies", store.len());
    let app = router(build_schema(store));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
