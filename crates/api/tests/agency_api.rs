//! HTTP-level integration tests for the `/agencies` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_resource, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_agency_full_lifecycle(pool: PgPool) {
    // POST a valid agency.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/agencies",
        serde_json::json!({
            "name": "Sanitation Dept",
            "code": "SAN",
            "description": "Handles waste"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_string());
    let id = created["id"].as_str().unwrap().to_string();

    // GET returns the same fields.
    let response = get(build_test_app(pool.clone()), &format!("/api/agencies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], "Sanitation Dept");
    assert_eq!(fetched["code"], "SAN");
    assert_eq!(fetched["description"], "Handles waste");

    // DELETE succeeds with 204.
    let response = delete(build_test_app(pool.clone()), &format!("/api/agencies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET is a 404.
    let response = get(build_test_app(pool), &format!("/api/agencies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_agency_code_boundary(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/agencies",
        serde_json::json!({
            "name": "Parks",
            "code": "P".repeat(11),
            "description": "Green spaces"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        build_test_app(pool),
        "/api/agencies",
        serde_json::json!({
            "name": "Parks",
            "code": "P".repeat(10),
            "description": "Green spaces"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_agency_description_boundary(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/agencies",
        serde_json::json!({
            "name": "Parks",
            "code": "PRK",
            "description": "d".repeat(251)
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        build_test_app(pool),
        "/api/agencies",
        serde_json::json!({
            "name": "Parks",
            "code": "PRK",
            "description": "d".repeat(250)
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_agency(pool: PgPool) {
    let agency = create_resource(
        &pool,
        "/api/agencies",
        serde_json::json!({
            "name": "Sanitation",
            "code": "SAN",
            "description": "Handles waste"
        }),
    )
    .await;
    let id = agency["id"].as_str().unwrap();

    let response = put_json(
        build_test_app(pool),
        &format!("/api/agencies/{id}"),
        serde_json::json!({
            "name": "Sanitation Dept",
            "code": "SAN",
            "description": "Waste and recycling"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Sanitation Dept");
    assert_eq!(json["id"], agency["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_agencies(pool: PgPool) {
    for (name, code) in [("Sanitation", "SAN"), ("Parks", "PRK")] {
        create_resource(
            &pool,
            "/api/agencies",
            serde_json::json!({"name": name, "code": code, "description": "Civic services"}),
        )
        .await;
    }

    let response = get(build_test_app(pool), "/api/agencies").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
