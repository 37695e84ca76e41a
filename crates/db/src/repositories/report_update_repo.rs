//! Repository for the `report_updates` table.
//!
//! Follow-up entries are scoped to their report: every lookup takes the
//! report id as well, so an entry can never be addressed through another
//! report's URL.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::report_update::ReportUpdate;

use crate::models::report_update::ReportUpdateRow;

/// Column list for `report_updates` queries.
const COLUMNS: &str = "id, report_id, status, note, updated_at";

/// Provides append/read/delete operations for report follow-ups.
pub struct ReportUpdateRepo;

impl ReportUpdateRepo {
    /// Persist a new follow-up entry, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        entry: &ReportUpdate,
    ) -> Result<ReportUpdateRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO report_updates (id, report_id, status, note, updated_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReportUpdateRow>(&query)
            .bind(entry.id())
            .bind(entry.report_id())
            .bind(entry.status())
            .bind(entry.note())
            .bind(entry.updated_at())
            .fetch_one(executor)
            .await
    }

    /// Find a follow-up entry by ID within `report_id`.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        report_id: Uuid,
        id: Uuid,
    ) -> Result<Option<ReportUpdateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM report_updates WHERE report_id = $1 AND id = $2");
        sqlx::query_as::<_, ReportUpdateRow>(&query)
            .bind(report_id)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List a report's follow-up timeline, oldest first.
    pub async fn list_by_report(
        executor: impl PgExecutor<'_>,
        report_id: Uuid,
    ) -> Result<Vec<ReportUpdateRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM report_updates WHERE report_id = $1 ORDER BY updated_at");
        sqlx::query_as::<_, ReportUpdateRow>(&query)
            .bind(report_id)
            .fetch_all(executor)
            .await
    }

    /// Delete a follow-up entry within `report_id`. Returns `false` if it
    /// did not resolve.
    pub async fn delete(
        executor: impl PgExecutor<'_>,
        report_id: Uuid,
        id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM report_updates WHERE report_id = $1 AND id = $2")
            .bind(report_id)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
