//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production via
//! [`build_app_router`]) through `tower::ServiceExt::oneshot`, without a
//! TCP listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use civica_api::config::ServerConfig;
use civica_api::router::build_app_router;
use civica_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST and return the created JSON body, asserting 201.
pub async fn create_resource(pool: &PgPool, path: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), path, body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "expected 201 creating {path}"
    );
    body_json(response).await
}

/// Create the full state -> city -> neighborhood -> location chain and
/// return the four created bodies.
pub async fn seed_location_chain(
    pool: &PgPool,
) -> (
    serde_json::Value,
    serde_json::Value,
    serde_json::Value,
    serde_json::Value,
) {
    let state = create_resource(
        pool,
        "/api/states",
        serde_json::json!({"name": "São Paulo", "code": "SP"}),
    )
    .await;
    let city = create_resource(
        pool,
        "/api/cities",
        serde_json::json!({"state_id": state["id"], "name": "Campinas"}),
    )
    .await;
    let neighborhood = create_resource(
        pool,
        "/api/neighborhoods",
        serde_json::json!({
            "city_id": city["id"],
            "state_id": state["id"],
            "name": "Centro"
        }),
    )
    .await;
    let location = create_resource(
        pool,
        "/api/locations",
        serde_json::json!({
            "neighborhood_id": neighborhood["id"],
            "street": "Rua das Flores",
            "number": "123",
            "complement": "Apto 4"
        }),
    )
    .await;
    (state, city, neighborhood, location)
}
