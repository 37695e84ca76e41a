//! Handlers for the `/cities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::city::City;
use civica_core::error::DomainError;
use civica_db::models::city::{CityDetail, CreateCity, UpdateCity};
use civica_db::repositories::{CityRepo, StateRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/cities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CityDetail>>> {
    let cities = CityRepo::list_detailed(&state.pool).await?;
    Ok(Json(cities))
}

/// GET /api/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CityDetail>> {
    let city = CityRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "City",
            id,
        }))?;
    Ok(Json(city))
}

/// POST /api/cities
///
/// 400 if the referenced state does not exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<(StatusCode, Json<CityDetail>)> {
    let mut tx = state.pool.begin().await?;

    if !StateRepo::exists(&mut *tx, input.state_id).await? {
        return Err(AppError::BadRequest(format!(
            "State {} not found",
            input.state_id
        )));
    }

    let entity = City::new(input.state_id, &input.name)?;
    let row = CityRepo::insert(&mut *tx, &entity).await?;
    let detail = CityRepo::find_detailed(&mut *tx, row.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created city vanished".into()))?;
    tx.commit().await?;

    tracing::info!(city_id = %detail.id, "City created");
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/cities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCity>,
) -> AppResult<Json<CityDetail>> {
    let mut tx = state.pool.begin().await?;

    let current = CityRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "City",
            id,
        }))?;

    let updated = current.into_domain().update(&input.name)?;
    CityRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "City",
            id,
        }))?;
    let detail = CityRepo::find_detailed(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated city vanished".into()))?;
    tx.commit().await?;

    Ok(Json(detail))
}

/// DELETE /api/cities/{id}
///
/// Rejected while neighborhoods still reference the city.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let dependents = CityRepo::dependent_count(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(AppError::Domain(DomainError::Conflict(format!(
            "City has {dependents} dependent record(s) and cannot be deleted"
        ))));
    }

    let deleted = CityRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "City",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(city_id = %id, "City deleted");
    Ok(StatusCode::NO_CONTENT)
}
