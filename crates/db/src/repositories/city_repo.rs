//! Repository for the `cities` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::city::City;

use crate::models::city::{CityDetail, CityRow};

/// Column list for `cities` queries.
const COLUMNS: &str = "id, state_id, name";

/// Join producing [`CityDetail`] rows.
const DETAIL_SELECT: &str = "\
    SELECT c.id, c.name, c.state_id, s.name AS state_name \
    FROM cities c \
    JOIN states s ON c.state_id = s.id";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Persist a new city, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        city: &City,
    ) -> Result<CityRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (id, state_id, name) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CityRow>(&query)
            .bind(city.id())
            .bind(city.state_id())
            .bind(city.name())
            .fetch_one(executor)
            .await
    }

    /// Find a city by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<CityRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, CityRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a city by ID with its state's display name.
    pub async fn find_detailed(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<CityDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE c.id = $1");
        sqlx::query_as::<_, CityDetail>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all cities with state display names, ordered by name.
    pub async fn list_detailed(
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<CityDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY c.name");
        sqlx::query_as::<_, CityDetail>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `city` back. Returns the updated row
    /// if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        city: &City,
    ) -> Result<Option<CityRow>, sqlx::Error> {
        let query = format!("UPDATE cities SET name = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CityRow>(&query)
            .bind(city.name())
            .bind(city.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete a city. Returns `false` if the id did not resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of neighborhoods under this city. Non-zero blocks deletion.
    pub async fn dependent_count(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM neighborhoods WHERE city_id = $1")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
