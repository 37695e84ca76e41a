//! Repository for the `agencies` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::agency::Agency;

use crate::models::agency::AgencyRow;

/// Column list for `agencies` queries.
const COLUMNS: &str = "id, name, code, description";

/// Provides CRUD operations for public agencies.
pub struct AgencyRepo;

impl AgencyRepo {
    /// Persist a new agency, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        agency: &Agency,
    ) -> Result<AgencyRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO agencies (id, name, code, description) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AgencyRow>(&query)
            .bind(agency.id())
            .bind(agency.name())
            .bind(agency.code())
            .bind(agency.description())
            .fetch_one(executor)
            .await
    }

    /// Find an agency by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<AgencyRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies WHERE id = $1");
        sqlx::query_as::<_, AgencyRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all agencies ordered by name.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<AgencyRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies ORDER BY name");
        sqlx::query_as::<_, AgencyRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `agency` back. Returns the updated
    /// row if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        agency: &Agency,
    ) -> Result<Option<AgencyRow>, sqlx::Error> {
        let query = format!(
            "UPDATE agencies SET name = $1, code = $2, description = $3 \
             WHERE id = $4 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AgencyRow>(&query)
            .bind(agency.name())
            .bind(agency.code())
            .bind(agency.description())
            .bind(agency.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete an agency. Returns `false` if the id did not resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM agencies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an agency row with `id` exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM agencies WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Number of reports assigned to this agency. Non-zero blocks
    /// deletion.
    pub async fn dependent_count(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE agency_id = $1")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
