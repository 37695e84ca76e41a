//! Repository for the `locations` table.
//!
//! Display queries reach city and state by traversal
//! (location -> neighborhood -> city -> state); the location row itself
//! only owns the neighborhood reference.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::location::Location;

use crate::models::location::{LocationDetail, LocationRow};

/// Column list for `locations` queries.
const COLUMNS: &str =
    "id, neighborhood_id, street, number, complement, postal_code, latitude, longitude";

/// Join producing [`LocationDetail`] rows.
const DETAIL_SELECT: &str = "\
    SELECT l.id, l.street, l.number, l.complement, l.postal_code, l.latitude, l.longitude, \
           l.neighborhood_id, n.name AS neighborhood_name, \
           c.name AS city_name, s.name AS state_name \
    FROM locations l \
    JOIN neighborhoods n ON l.neighborhood_id = n.id \
    JOIN cities c ON n.city_id = c.id \
    JOIN states s ON c.state_id = s.id";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Persist a new location, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        location: &Location,
    ) -> Result<LocationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations \
                (id, neighborhood_id, street, number, complement, postal_code, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LocationRow>(&query)
            .bind(location.id())
            .bind(location.neighborhood_id())
            .bind(location.street())
            .bind(location.number())
            .bind(location.complement())
            .bind(location.postal_code())
            .bind(location.latitude())
            .bind(location.longitude())
            .fetch_one(executor)
            .await
    }

    /// Find a location by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<LocationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, LocationRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a location by ID with display names derived by traversal.
    pub async fn find_detailed(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<LocationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE l.id = $1");
        sqlx::query_as::<_, LocationDetail>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all locations with display names, ordered by street.
    pub async fn list_detailed(
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<LocationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY l.street, l.number");
        sqlx::query_as::<_, LocationDetail>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `location` back. Returns the updated
    /// row if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        location: &Location,
    ) -> Result<Option<LocationRow>, sqlx::Error> {
        let query = format!(
            "UPDATE locations \
             SET neighborhood_id = $1, street = $2, number = $3, complement = $4, \
                 postal_code = $5, latitude = $6, longitude = $7 \
             WHERE id = $8 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LocationRow>(&query)
            .bind(location.neighborhood_id())
            .bind(location.street())
            .bind(location.number())
            .bind(location.complement())
            .bind(location.postal_code())
            .bind(location.latitude())
            .bind(location.longitude())
            .bind(location.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete a location. Returns `false` if the id did not resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a location row with `id` exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM locations WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Number of reports filed against this location. Non-zero blocks
    /// deletion.
    pub async fn dependent_count(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE location_id = $1")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
