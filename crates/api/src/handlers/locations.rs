//! Handlers for the `/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::error::DomainError;
use civica_core::location::Location;
use civica_db::models::location::{LocationDetail, LocationInput};
use civica_db::repositories::{LocationRepo, NeighborhoodRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LocationDetail>>> {
    let locations = LocationRepo::list_detailed(&state.pool).await?;
    Ok(Json(locations))
}

/// GET /api/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LocationDetail>> {
    let location = LocationRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// POST /api/locations
///
/// 400 if the referenced neighborhood does not exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<LocationInput>,
) -> AppResult<(StatusCode, Json<LocationDetail>)> {
    let mut tx = state.pool.begin().await?;

    if !NeighborhoodRepo::exists(&mut *tx, input.neighborhood_id).await? {
        return Err(AppError::BadRequest(format!(
            "Neighborhood {} not found",
            input.neighborhood_id
        )));
    }

    let entity = Location::new(input.neighborhood_id, input.as_fields())?;
    let row = LocationRepo::insert(&mut *tx, &entity).await?;
    let detail = LocationRepo::find_detailed(&mut *tx, row.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created location vanished".into()))?;
    tx.commit().await?;

    tracing::info!(location_id = %detail.id, "Location created");
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/locations/{id}
///
/// The location may move to a different (existing) neighborhood.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<LocationInput>,
) -> AppResult<Json<LocationDetail>> {
    let mut tx = state.pool.begin().await?;

    let current = LocationRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Location",
            id,
        }))?;

    if !NeighborhoodRepo::exists(&mut *tx, input.neighborhood_id).await? {
        return Err(AppError::BadRequest(format!(
            "Neighborhood {} not found",
            input.neighborhood_id
        )));
    }

    let updated = current
        .into_domain()
        .update(input.neighborhood_id, input.as_fields())?;
    LocationRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Location",
            id,
        }))?;
    let detail = LocationRepo::find_detailed(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated location vanished".into()))?;
    tx.commit().await?;

    Ok(Json(detail))
}

/// DELETE /api/locations/{id}
///
/// Rejected while reports still reference the location.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let dependents = LocationRepo::dependent_count(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(AppError::Domain(DomainError::Conflict(format!(
            "Location has {dependents} dependent report(s) and cannot be deleted"
        ))));
    }

    let deleted = LocationRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "Location",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(location_id = %id, "Location deleted");
    Ok(StatusCode::NO_CONTENT)
}
