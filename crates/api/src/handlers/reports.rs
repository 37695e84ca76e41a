//! Handlers for the `/reports` resource.
//!
//! Filing a report requires the referenced user, location and agency to
//! resolve inside the same transaction as the insert; a dangling
//! reference fails the whole request with 400 and persists nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::error::DomainError;
use civica_core::report::Report;
use civica_db::models::report::{CreateReport, ReportDetail, UpdateReport};
use civica_db::repositories::{AgencyRepo, LocationRepo, ReportRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/reports
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ReportDetail>>> {
    let reports = ReportRepo::list_detailed(&state.pool).await?;
    Ok(Json(reports))
}

/// GET /api/reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReportDetail>> {
    let report = ReportRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}

/// POST /api/reports
///
/// 400 if any of the referenced user, location or agency is absent.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<ReportDetail>)> {
    let mut tx = state.pool.begin().await?;

    if !UserRepo::exists(&mut *tx, input.user_id).await? {
        return Err(AppError::BadRequest(format!(
            "User {} not found",
            input.user_id
        )));
    }
    if !LocationRepo::exists(&mut *tx, input.location_id).await? {
        return Err(AppError::BadRequest(format!(
            "Location {} not found",
            input.location_id
        )));
    }
    if !AgencyRepo::exists(&mut *tx, input.agency_id).await? {
        return Err(AppError::BadRequest(format!(
            "Agency {} not found",
            input.agency_id
        )));
    }

    let entity = Report::new(
        input.user_id,
        input.location_id,
        input.agency_id,
        &input.title,
        &input.description,
    )?;
    let row = ReportRepo::insert(&mut *tx, &entity).await?;
    let detail = ReportRepo::find_detailed(&mut *tx, row.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created report vanished".into()))?;
    tx.commit().await?;

    tracing::info!(report_id = %detail.id, user_id = %input.user_id, "Report filed");
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/reports/{id}
///
/// Replaces title, description and status; returns 204 on success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateReport>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let current = ReportRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Report",
            id,
        }))?;

    let updated = current
        .into_domain()
        .update(&input.title, &input.description, &input.status)?;
    ReportRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "Report",
            id,
        }))?;
    tx.commit().await?;

    tracing::info!(report_id = %id, status = %input.status, "Report updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/reports/{id}
///
/// Follow-up entries are removed with the report.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let deleted = ReportRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "Report",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(report_id = %id, "Report deleted");
    Ok(StatusCode::NO_CONTENT)
}
