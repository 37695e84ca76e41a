//! Handlers for the `/agencies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::agency::Agency;
use civica_core::error::DomainError;
use civica_db::models::agency::{AgencyRow, CreateAgency, UpdateAgency};
use civica_db::repositories::AgencyRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/agencies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AgencyRow>>> {
    let agencies = AgencyRepo::list(&state.pool).await?;
    Ok(Json(agencies))
}

/// GET /api/agencies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AgencyRow>> {
    let agency = AgencyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Agency",
            id,
        }))?;
    Ok(Json(agency))
}

/// POST /api/agencies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAgency>,
) -> AppResult<(StatusCode, Json<AgencyRow>)> {
    let entity = Agency::new(&input.name, &input.code, &input.description)?;

    let mut tx = state.pool.begin().await?;
    let row = AgencyRepo::insert(&mut *tx, &entity).await?;
    tx.commit().await?;

    tracing::info!(agency_id = %row.id, "Agency created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/agencies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateAgency>,
) -> AppResult<Json<AgencyRow>> {
    let mut tx = state.pool.begin().await?;

    let current = AgencyRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Agency",
            id,
        }))?;

    let updated = current
        .into_domain()
        .update(&input.name, &input.code, &input.description)?;
    let row = AgencyRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Agency",
            id,
        }))?;
    tx.commit().await?;

    Ok(Json(row))
}

/// DELETE /api/agencies/{id}
///
/// Rejected while reports still reference the agency.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let dependents = AgencyRepo::dependent_count(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(AppError::Domain(DomainError::Conflict(format!(
            "Agency has {dependents} dependent report(s) and cannot be deleted"
        ))));
    }

    let deleted = AgencyRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "Agency",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(agency_id = %id, "Agency deleted");
    Ok(StatusCode::NO_CONTENT)
}
