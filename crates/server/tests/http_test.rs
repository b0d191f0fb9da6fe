//! Integration tests for the HTTP layer.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use movie_store::MovieStore;
use serde_json::{json, Value};
use server::{build_schema, router};
use tower::ServiceExt;

fn test_app() -> Router {
    router(build_schema(MovieStore::seeded()))
}

async fn post_graphql(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_post_query() {
    let (status, body) = post_graphql(
        test_app(),
        json!({ "query": "{ movies { id title } }" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "movies": [{ "id": "1", "title": "The Shawshank Redemption" }] } })
    );
}

#[tokio::test]
async fn test_post_with_variables() {
    let (status, body) = post_graphql(
        test_app(),
        json!({
            "query": "query Movie($id: String) { movie(id: $id) { director } }",
            "variables": { "id": "1" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["movie"]["director"], "Frank Darabont");
}

#[tokio::test]
async fn test_post_mutation_then_query_shares_state() {
    let app = test_app();

    let (_, body) = post_graphql(
        app.clone(),
        json!({
            "query": r#"mutation { addMovie(title: "Inception", director: "Christopher Nolan", release_date: "2010-07-16") { id } }"#
        }),
    )
    .await;
    let new_id = body["data"]["addMovie"]["id"].as_str().unwrap().to_string();

    let (_, body) = post_graphql(
        app,
        json!({
            "query": "query Movie($id: String) { movie(id: $id) { title } }",
            "variables": { "id": new_id }
        }),
    )
    .await;
    assert_eq!(body["data"]["movie"]["title"], "Inception");
}

#[tokio::test]
async fn test_malformed_document_returns_graphql_error() {
    let (_, body) = post_graphql(test_app(), json!({ "query": "{ movies { " })).await;

    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
}

#[tokio::test]
async fn test_get_serves_graphiql() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("graphiql"));
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
