//! Handlers for the `/neighborhoods` resource.
//!
//! A neighborhood carries both a city and a (denormalized) state
//! reference. Creation enforces the consistency rule that the city
//! actually belongs to the given state, so the pair can never drift.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::error::DomainError;
use civica_core::neighborhood::Neighborhood;
use civica_db::models::neighborhood::{CreateNeighborhood, NeighborhoodDetail, UpdateNeighborhood};
use civica_db::repositories::{CityRepo, NeighborhoodRepo, StateRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/neighborhoods
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NeighborhoodDetail>>> {
    let neighborhoods = NeighborhoodRepo::list_detailed(&state.pool).await?;
    Ok(Json(neighborhoods))
}

/// GET /api/neighborhoods/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<NeighborhoodDetail>> {
    let neighborhood = NeighborhoodRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Neighborhood",
            id,
        }))?;
    Ok(Json(neighborhood))
}

/// POST /api/neighborhoods
///
/// 400 if the referenced city or state does not exist, or if the city
/// does not belong to the state.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNeighborhood>,
) -> AppResult<(StatusCode, Json<NeighborhoodDetail>)> {
    let mut tx = state.pool.begin().await?;

    let city = CityRepo::find_by_id(&mut *tx, input.city_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("City {} not found", input.city_id)))?;

    if !StateRepo::exists(&mut *tx, input.state_id).await? {
        return Err(AppError::BadRequest(format!(
            "State {} not found",
            input.state_id
        )));
    }

    if city.state_id != input.state_id {
        return Err(AppError::BadRequest(format!(
            "City {} does not belong to state {}",
            input.city_id, input.state_id
        )));
    }

    let entity = Neighborhood::new(input.city_id, input.state_id, &input.name)?;
    let row = NeighborhoodRepo::insert(&mut *tx, &entity).await?;
    let detail = NeighborhoodRepo::find_detailed(&mut *tx, row.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created neighborhood vanished".into()))?;
    tx.commit().await?;

    tracing::info!(neighborhood_id = %detail.id, "Neighborhood created");
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/neighborhoods/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateNeighborhood>,
) -> AppResult<Json<NeighborhoodDetail>> {
    let mut tx = state.pool.begin().await?;

    let current = NeighborhoodRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Neighborhood",
            id,
        }))?;

    let updated = current.into_domain().update(&input.name)?;
    NeighborhoodRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Neighborhood",
            id,
        }))?;
    let detail = NeighborhoodRepo::find_detailed(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated neighborhood vanished".into()))?;
    tx.commit().await?;

    Ok(Json(detail))
}

/// DELETE /api/neighborhoods/{id}
///
/// Rejected while locations still reference the neighborhood.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let dependents = NeighborhoodRepo::dependent_count(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(AppError::Domain(DomainError::Conflict(format!(
            "Neighborhood has {dependents} dependent record(s) and cannot be deleted"
        ))));
    }

    let deleted = NeighborhoodRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "Neighborhood",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(neighborhood_id = %id, "Neighborhood deleted");
    Ok(StatusCode::NO_CONTENT)
}
