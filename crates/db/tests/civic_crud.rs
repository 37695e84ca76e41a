//! Integration tests for the repository layer against a real database:
//! hierarchy creation, dependency counts, email lookup, update read-back
//! and the denormalized display queries.

use sqlx::PgPool;
use uuid::Uuid;

use civica_core::agency::Agency;
use civica_core::city::City;
use civica_core::location::{Location, LocationFields};
use civica_core::neighborhood::Neighborhood;
use civica_core::report::Report;
use civica_core::report_update::ReportUpdate;
use civica_core::role::Role;
use civica_core::state::State;
use civica_core::user::User;
use civica_db::repositories::{
    AgencyRepo, CityRepo, LocationRepo, NeighborhoodRepo, ReportRepo, ReportUpdateRepo, StateRepo,
    UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_hierarchy(pool: &PgPool) -> (State, City, Neighborhood, Location) {
    let state = State::new("São Paulo", "SP").unwrap();
    StateRepo::insert(pool, &state).await.unwrap();

    let city = City::new(state.id(), "Campinas").unwrap();
    CityRepo::insert(pool, &city).await.unwrap();

    let neighborhood = Neighborhood::new(city.id(), state.id(), "Centro").unwrap();
    NeighborhoodRepo::insert(pool, &neighborhood).await.unwrap();

    let location = Location::new(
        neighborhood.id(),
        LocationFields {
            street: "Rua das Flores",
            number: "123",
            complement: Some("Apto 4"),
            ..Default::default()
        },
    )
    .unwrap();
    LocationRepo::insert(pool, &location).await.unwrap();

    (state, city, neighborhood, location)
}

async fn seed_user(pool: &PgPool, email: &str) -> User {
    let user = User::new("Ana Silva", email, "$argon2id$stub", Role::User).unwrap();
    UserRepo::insert(pool, &user).await.unwrap();
    user
}

async fn seed_agency(pool: &PgPool) -> Agency {
    let agency = Agency::new("Sanitation Dept", "SAN", "Handles waste").unwrap();
    AgencyRepo::insert(pool, &agency).await.unwrap();
    agency
}

// ---------------------------------------------------------------------------
// Hierarchy and display queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_hierarchy_roundtrip(pool: PgPool) {
    let (state, city, neighborhood, location) = seed_hierarchy(&pool).await;

    let row = StateRepo::find_by_id(&pool, state.id()).await.unwrap().unwrap();
    assert_eq!(row.name, "São Paulo");

    let detail = CityRepo::find_detailed(&pool, city.id()).await.unwrap().unwrap();
    assert_eq!(detail.state_name, "São Paulo");

    let detail = NeighborhoodRepo::find_detailed(&pool, neighborhood.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.city_name, "Campinas");
    assert_eq!(detail.state_name, "São Paulo");

    // Location display names come from traversal, not stored copies.
    let detail = LocationRepo::find_detailed(&pool, location.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.neighborhood_name, "Centro");
    assert_eq!(detail.city_name, "Campinas");
    assert_eq!(detail.state_name, "São Paulo");
    assert_eq!(detail.complement.as_deref(), Some("Apto 4"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dependent_counts_drive_delete_policy(pool: PgPool) {
    let (state, city, neighborhood, location) = seed_hierarchy(&pool).await;

    // city + neighborhood both reference the state directly.
    assert_eq!(StateRepo::dependent_count(&pool, state.id()).await.unwrap(), 2);
    assert_eq!(CityRepo::dependent_count(&pool, city.id()).await.unwrap(), 1);
    assert_eq!(
        NeighborhoodRepo::dependent_count(&pool, neighborhood.id())
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        LocationRepo::dependent_count(&pool, location.id())
            .await
            .unwrap(),
        0
    );

    // Bottom-up deletion drains the counts.
    assert!(LocationRepo::delete(&pool, location.id()).await.unwrap());
    assert_eq!(
        NeighborhoodRepo::dependent_count(&pool, neighborhood.id())
            .await
            .unwrap(),
        0
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_read_back(pool: PgPool) {
    let (state, ..) = seed_hierarchy(&pool).await;

    let row = StateRepo::find_by_id(&pool, state.id()).await.unwrap().unwrap();
    let updated = row.into_domain().update("Estado de São Paulo", "SP").unwrap();
    StateRepo::update(&pool, &updated).await.unwrap().unwrap();

    let row = StateRepo::find_by_id(&pool, state.id()).await.unwrap().unwrap();
    assert_eq!(row.name, "Estado de São Paulo");
    assert_eq!(row.id, state.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let orphan = State::new("Nowhere", "NW").unwrap();
    let result = StateRepo::update(&pool, &orphan).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_email(pool: PgPool) {
    seed_user(&pool, "ana@example.com").await;

    let found = UserRepo::find_by_email(&pool, "ana@example.com")
        .await
        .unwrap();
    assert!(found.is_some());

    let missing = UserRepo::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_round_trips_through_storage(pool: PgPool) {
    let admin = User::new("Root", "root@example.com", "$argon2id$stub", Role::Admin).unwrap();
    UserRepo::insert(&pool, &admin).await.unwrap();

    let row = UserRepo::find_by_id(&pool, admin.id()).await.unwrap().unwrap();
    assert_eq!(row.role, "ADMIN");
    assert_eq!(row.into_domain().role(), Role::Admin);
}

// ---------------------------------------------------------------------------
// Reports and follow-ups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_detail_join(pool: PgPool) {
    let (_state, _city, _neighborhood, location) = seed_hierarchy(&pool).await;
    let user = seed_user(&pool, "ana@example.com").await;
    let agency = seed_agency(&pool).await;

    let report = Report::new(
        user.id(),
        location.id(),
        agency.id(),
        "Overflowing bins",
        "Not collected for two weeks",
    )
    .unwrap();
    ReportRepo::insert(&pool, &report).await.unwrap();

    let detail = ReportRepo::find_detailed(&pool, report.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.user_name, "Ana Silva");
    assert_eq!(detail.agency_name, "Sanitation Dept");
    assert_eq!(detail.location, "Rua das Flores, 123");
    assert_eq!(detail.status, "Pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_insert_with_dangling_reference_is_rejected_by_schema(pool: PgPool) {
    let (_state, _city, _neighborhood, location) = seed_hierarchy(&pool).await;
    let agency = seed_agency(&pool).await;

    // The FK backstop fires even if the handler-level existence check is
    // bypassed.
    let report = Report::new(
        Uuid::new_v4(),
        location.id(),
        agency.id(),
        "Orphan",
        "No such user",
    )
    .unwrap();
    let result = ReportRepo::insert(&pool, &report).await;
    assert!(result.is_err(), "dangling user_id must not insert");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_follow_ups_are_scoped_to_their_report(pool: PgPool) {
    let (_state, _city, _neighborhood, location) = seed_hierarchy(&pool).await;
    let user = seed_user(&pool, "ana@example.com").await;
    let agency = seed_agency(&pool).await;

    let first = Report::new(user.id(), location.id(), agency.id(), "First", "d").unwrap();
    let second = Report::new(user.id(), location.id(), agency.id(), "Second", "d").unwrap();
    ReportRepo::insert(&pool, &first).await.unwrap();
    ReportRepo::insert(&pool, &second).await.unwrap();

    let entry = ReportUpdate::new(first.id(), "In Progress", Some("Crew dispatched")).unwrap();
    ReportUpdateRepo::insert(&pool, &entry).await.unwrap();

    // Visible under its own report.
    let found = ReportUpdateRepo::find_by_id(&pool, first.id(), entry.id())
        .await
        .unwrap();
    assert!(found.is_some());

    // Not addressable through another report.
    let cross = ReportUpdateRepo::find_by_id(&pool, second.id(), entry.id())
        .await
        .unwrap();
    assert!(cross.is_none());

    // Cascade on report delete.
    assert!(ReportRepo::delete(&pool, first.id()).await.unwrap());
    let timeline = ReportUpdateRepo::list_by_report(&pool, first.id())
        .await
        .unwrap();
    assert!(timeline.is_empty());
}
