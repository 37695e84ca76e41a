//! HTTP-level integration tests for `/reports` and the nested follow-up
//! timeline.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_resource, delete, get, post_json, put_json};
use sqlx::PgPool;

/// Seed the full graph a report needs: user, location chain, agency.
/// Returns `(user, location, agency)`.
async fn seed_report_graph(
    pool: &PgPool,
) -> (serde_json::Value, serde_json::Value, serde_json::Value) {
    let (_state, _city, _neighborhood, location) = common::seed_location_chain(pool).await;
    let user = create_resource(
        pool,
        "/api/users",
        serde_json::json!({
            "name": "Ana Silva",
            "email": "ana@example.com",
            "password": "correct-horse"
        }),
    )
    .await;
    let agency = create_resource(
        pool,
        "/api/agencies",
        serde_json::json!({
            "name": "Sanitation Dept",
            "code": "SAN",
            "description": "Handles waste"
        }),
    )
    .await;
    (user, location, agency)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_file_report_defaults_to_pending(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;

    let response = post_json(
        build_test_app(pool),
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "Overflowing bins",
            "description": "Bins on the corner have not been collected for two weeks"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "Pending");
    assert_eq!(json["user_name"], "Ana Silva");
    assert_eq!(json["agency_name"], "Sanitation Dept");
    assert_eq!(json["location"], "Rua das Flores, 123");
    assert!(json["reported_at"].is_string(), "ISO-8601 timestamp");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_with_dangling_reference_persists_nothing(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;
    let missing = "00000000-0000-0000-0000-000000000000";

    // Each of the three references, absent in turn.
    for body in [
        serde_json::json!({
            "user_id": missing,
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "t", "description": "d"
        }),
        serde_json::json!({
            "user_id": user["id"],
            "location_id": missing,
            "agency_id": agency["id"],
            "title": "t", "description": "d"
        }),
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": missing,
            "title": "t", "description": "d"
        }),
    ] {
        let response = post_json(build_test_app(pool.clone()), "/api/reports", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let reports = body_json(get(build_test_app(pool), "/api/reports").await).await;
    assert_eq!(reports.as_array().unwrap().len(), 0, "no report persisted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_title_boundary(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "t".repeat(101),
            "description": "d"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        build_test_app(pool),
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "t".repeat(100),
            "description": "d"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_report_returns_204_and_persists(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;
    let report = create_resource(
        &pool,
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "Overflowing bins",
            "description": "Not collected"
        }),
    )
    .await;
    let id = report["id"].as_str().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/reports/{id}"),
        serde_json::json!({
            "title": "Overflowing bins",
            "description": "Not collected",
            "status": "In Progress"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(build_test_app(pool), &format!("/api/reports/{id}")).await).await;
    assert_eq!(json["status"], "In Progress");
    assert_eq!(json["reported_at"], report["reported_at"], "filing time fixed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_report_update_leaves_row_unchanged(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;
    let report = create_resource(
        &pool,
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "Overflowing bins",
            "description": "Not collected"
        }),
    )
    .await;
    let id = report["id"].as_str().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/reports/{id}"),
        serde_json::json!({
            "title": "",
            "description": "changed",
            "status": "Closed"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(build_test_app(pool), &format!("/api/reports/{id}")).await).await;
    assert_eq!(json["title"], "Overflowing bins");
    assert_eq!(json["description"], "Not collected");
    assert_eq!(json["status"], "Pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_report_cascades_follow_ups(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;
    let report = create_resource(
        &pool,
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "Overflowing bins",
            "description": "Not collected"
        }),
    )
    .await;
    let id = report["id"].as_str().unwrap();

    create_resource(
        &pool,
        &format!("/api/reports/{id}/updates"),
        serde_json::json!({"status": "In Progress", "note": "Crew dispatched"}),
    )
    .await;

    let response = delete(build_test_app(pool.clone()), &format!("/api/reports/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM report_updates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0, "follow-ups removed with the report");
}

// ---------------------------------------------------------------------------
// Follow-up timeline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_follow_up_timeline_lists_oldest_first(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;
    let report = create_resource(
        &pool,
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "Overflowing bins",
            "description": "Not collected"
        }),
    )
    .await;
    let id = report["id"].as_str().unwrap();

    for status in ["Open", "In Progress", "Done"] {
        create_resource(
            &pool,
            &format!("/api/reports/{id}/updates"),
            serde_json::json!({"status": status}),
        )
        .await;
    }

    let json = body_json(
        get(
            build_test_app(pool),
            &format!("/api/reports/{id}/updates"),
        )
        .await,
    )
    .await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["status"], "Open");
    assert_eq!(entries[2]["status"], "Done");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_follow_up_for_missing_report_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/reports/00000000-0000-0000-0000-000000000000/updates",
        serde_json::json!({"status": "Open"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_with_report_is_rejected(pool: PgPool) {
    let (user, location, agency) = seed_report_graph(&pool).await;
    create_resource(
        &pool,
        "/api/reports",
        serde_json::json!({
            "user_id": user["id"],
            "location_id": location["id"],
            "agency_id": agency["id"],
            "title": "Overflowing bins",
            "description": "Not collected"
        }),
    )
    .await;

    let user_id = user["id"].as_str().unwrap();
    let response = delete(build_test_app(pool), &format!("/api/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
