//! Repository for the `neighborhoods` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::neighborhood::Neighborhood;

use crate::models::neighborhood::{NeighborhoodDetail, NeighborhoodRow};

/// Column list for `neighborhoods` queries.
const COLUMNS: &str = "id, city_id, state_id, name";

/// Join producing [`NeighborhoodDetail`] rows.
const DETAIL_SELECT: &str = "\
    SELECT n.id, n.name, n.city_id, c.name AS city_name, n.state_id, s.name AS state_name \
    FROM neighborhoods n \
    JOIN cities c ON n.city_id = c.id \
    JOIN states s ON n.state_id = s.id";

/// Provides CRUD operations for neighborhoods.
pub struct NeighborhoodRepo;

impl NeighborhoodRepo {
    /// Persist a new neighborhood, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        neighborhood: &Neighborhood,
    ) -> Result<NeighborhoodRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO neighborhoods (id, city_id, state_id, name) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NeighborhoodRow>(&query)
            .bind(neighborhood.id())
            .bind(neighborhood.city_id())
            .bind(neighborhood.state_id())
            .bind(neighborhood.name())
            .fetch_one(executor)
            .await
    }

    /// Find a neighborhood by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<NeighborhoodRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM neighborhoods WHERE id = $1");
        sqlx::query_as::<_, NeighborhoodRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a neighborhood by ID with city and state display names.
    pub async fn find_detailed(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<NeighborhoodDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE n.id = $1");
        sqlx::query_as::<_, NeighborhoodDetail>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all neighborhoods with display names, ordered by name.
    pub async fn list_detailed(
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<NeighborhoodDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY n.name");
        sqlx::query_as::<_, NeighborhoodDetail>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `neighborhood` back. Returns the
    /// updated row if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        neighborhood: &Neighborhood,
    ) -> Result<Option<NeighborhoodRow>, sqlx::Error> {
        let query = format!("UPDATE neighborhoods SET name = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, NeighborhoodRow>(&query)
            .bind(neighborhood.name())
            .bind(neighborhood.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete a neighborhood. Returns `false` if the id did not
    /// resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM neighborhoods WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a neighborhood row with `id` exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM neighborhoods WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Number of locations under this neighborhood. Non-zero blocks
    /// deletion.
    pub async fn dependent_count(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM locations WHERE neighborhood_id = $1")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
