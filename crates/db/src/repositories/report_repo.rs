//! Repository for the `reports` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::report::Report;

use crate::models::report::{ReportDetail, ReportRow};

/// Column list for `reports` queries.
const COLUMNS: &str =
    "id, user_id, location_id, agency_id, title, description, reported_at, status";

/// Join producing [`ReportDetail`] rows: reporter and agency names, and
/// the address condensed to `"street, number"`.
const DETAIL_SELECT: &str = "\
    SELECT r.id, r.title, r.description, r.reported_at, r.status, \
           u.name AS user_name, \
           l.street || ', ' || l.number AS location, \
           a.name AS agency_name \
    FROM reports r \
    JOIN users u ON r.user_id = u.id \
    JOIN locations l ON r.location_id = l.id \
    JOIN agencies a ON r.agency_id = a.id";

/// Provides CRUD operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Persist a new report, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        report: &Report,
    ) -> Result<ReportRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports \
                (id, user_id, location_id, agency_id, title, description, reported_at, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReportRow>(&query)
            .bind(report.id())
            .bind(report.user_id())
            .bind(report.location_id())
            .bind(report.agency_id())
            .bind(report.title())
            .bind(report.description())
            .bind(report.reported_at())
            .bind(report.status())
            .fetch_one(executor)
            .await
    }

    /// Find a report by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<ReportRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, ReportRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a report by ID, denormalized for display.
    pub async fn find_detailed(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<ReportDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE r.id = $1");
        sqlx::query_as::<_, ReportDetail>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all reports denormalized for display, newest first.
    pub async fn list_detailed(
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<ReportDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY r.reported_at DESC");
        sqlx::query_as::<_, ReportDetail>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `report` back. Returns the updated
    /// row if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        report: &Report,
    ) -> Result<Option<ReportRow>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET title = $1, description = $2, status = $3 \
             WHERE id = $4 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReportRow>(&query)
            .bind(report.title())
            .bind(report.description())
            .bind(report.status())
            .bind(report.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete a report. Follow-up entries go with it (cascade).
    /// Returns `false` if the id did not resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a report row with `id` exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM reports WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
