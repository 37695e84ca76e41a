//! Handlers for the `/states` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::error::DomainError;
use civica_core::state::State as StateEntity;
use civica_db::models::state::{CreateState, StateRow, UpdateState};
use civica_db::repositories::StateRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/states
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StateRow>>> {
    let states = StateRepo::list(&state.pool).await?;
    Ok(Json(states))
}

/// GET /api/states/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StateRow>> {
    let row = StateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "State",
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/states
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateState>,
) -> AppResult<(StatusCode, Json<StateRow>)> {
    let entity = StateEntity::new(&input.name, &input.code)?;

    let mut tx = state.pool.begin().await?;
    let row = StateRepo::insert(&mut *tx, &entity).await?;
    tx.commit().await?;

    tracing::info!(state_id = %row.id, "State created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/states/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateState>,
) -> AppResult<Json<StateRow>> {
    let mut tx = state.pool.begin().await?;

    let current = StateRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "State",
            id,
        }))?;

    let updated = current.into_domain().update(&input.name, &input.code)?;
    let row = StateRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "State",
            id,
        }))?;
    tx.commit().await?;

    Ok(Json(row))
}

/// DELETE /api/states/{id}
///
/// Rejected while cities or neighborhoods still reference the state.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let dependents = StateRepo::dependent_count(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(AppError::Domain(DomainError::Conflict(format!(
            "State has {dependents} dependent record(s) and cannot be deleted"
        ))));
    }

    let deleted = StateRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "State",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(state_id = %id, "State deleted");
    Ok(StatusCode::NO_CONTENT)
}
