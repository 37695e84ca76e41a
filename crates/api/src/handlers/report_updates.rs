//! Handlers for a report's follow-up timeline,
//! `/reports/{id}/updates`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::error::DomainError;
use civica_core::report_update::ReportUpdate;
use civica_db::models::report_update::{CreateReportUpdate, ReportUpdateRow};
use civica_db::repositories::{ReportRepo, ReportUpdateRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/reports/{id}/updates
pub async fn list(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> AppResult<Json<Vec<ReportUpdateRow>>> {
    if !ReportRepo::exists(&state.pool, report_id).await? {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "Report",
            id: report_id,
        }));
    }

    let entries = ReportUpdateRepo::list_by_report(&state.pool, report_id).await?;
    Ok(Json(entries))
}

/// GET /api/reports/{id}/updates/{update_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((report_id, update_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ReportUpdateRow>> {
    let entry = ReportUpdateRepo::find_by_id(&state.pool, report_id, update_id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "ReportUpdate",
            id: update_id,
        }))?;
    Ok(Json(entry))
}

/// POST /api/reports/{id}/updates
///
/// 400 if the referenced report is absent.
pub async fn create(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Json(input): Json<CreateReportUpdate>,
) -> AppResult<(StatusCode, Json<ReportUpdateRow>)> {
    let mut tx = state.pool.begin().await?;

    if !ReportRepo::exists(&mut *tx, report_id).await? {
        return Err(AppError::BadRequest(format!(
            "Report {report_id} not found"
        )));
    }

    let entity = ReportUpdate::new(report_id, &input.status, input.note.as_deref())?;
    let row = ReportUpdateRepo::insert(&mut *tx, &entity).await?;
    tx.commit().await?;

    tracing::info!(report_id = %report_id, status = %row.status, "Report follow-up appended");
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/reports/{id}/updates/{update_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((report_id, update_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let deleted = ReportUpdateRepo::delete(&mut *tx, report_id, update_id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "ReportUpdate",
            id: update_id,
        }));
    }
    tx.commit().await?;

    tracing::info!(report_id = %report_id, update_id = %update_id, "Report follow-up deleted");
    Ok(StatusCode::NO_CONTENT)
}
